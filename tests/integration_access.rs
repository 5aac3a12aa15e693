mod common;

use axum::http::StatusCode;
use common::{
    create_test_user, expired_token, get_request, json_request, send, setup_offline_app,
    setup_test_app, valid_token,
};
use coursehub_models::UserRole;
use serde_json::json;
use sqlx::PgPool;

#[tokio::test]
async fn test_user_routes_require_token() {
    for uri in ["/users/me", "/likes"] {
        let (response, body) = send(setup_offline_app(), get_request(uri, None)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Verification failed");
        assert_eq!(body["errors"][0], "token required");
    }
}

#[tokio::test]
async fn test_malformed_token_is_rejected() {
    let (response, body) = send(
        setup_offline_app(),
        get_request("/users/me", Some("not.a.token")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "Wrong Token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let token = expired_token(1);
    let (response, body) = send(setup_offline_app(), get_request("/likes", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "Expired Token");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let foreign = coursehub_auth::issue_token(
        1,
        &coursehub_config::JwtConfig::new("some_other_secret"),
    )
    .unwrap();
    let (response, body) = send(setup_offline_app(), get_request("/users/me", Some(&foreign))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "Wrong Token");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    for uri in [
        "/admin/users",
        "/admin/courses",
        "/admin/categories",
        "/admin/articles",
        "/admin/settings",
        "/admin/charts/sex",
    ] {
        let (response, body) = send(setup_offline_app(), get_request(uri, None)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["errors"][0], "token required");
    }
}

#[tokio::test]
async fn test_toggle_like_checks_token_before_body() {
    let request = json_request("POST", "/likes", json!({ "courseId": 1 }));
    let (response, _) = send(setup_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_courses_by_category_requires_category_id() {
    let (response, body) = send(setup_offline_app(), get_request("/courses", None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], "categoryId is required");
}

#[tokio::test]
async fn test_non_numeric_path_id_is_bad_request() {
    let (response, body) = send(setup_offline_app(), get_request("/courses/abc", None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn test_openapi_document_lists_both_surfaces() {
    let (response, body) = send(
        setup_offline_app(),
        get_request("/api-docs/openapi.json", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/auth/sign_in"));
    assert!(paths.contains_key("/admin/auth/sign_in"));
    assert!(paths.contains_key("/likes"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_me_returns_profile(pool: PgPool) {
    let id = create_test_user(&pool, "henry", "secret123", UserRole::Normal).await;
    let token = valid_token(id);

    let (response, body) = send(setup_test_app(pool), get_request("/users/me", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["data"]["user"]["id"], id);
    assert_eq!(body["data"]["user"]["username"], "henry");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_surface_rejects_normal_user(pool: PgPool) {
    let id = create_test_user(&pool, "irene", "secret123", UserRole::Normal).await;
    let token = valid_token(id);

    let (response, body) =
        send(setup_test_app(pool), get_request("/admin/users", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "not authorized as admin");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_surface_rejects_deleted_user(pool: PgPool) {
    let token = valid_token(987_654);

    let (response, body) =
        send(setup_test_app(pool), get_request("/admin/users", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "user not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_lists_users(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "secret123", UserRole::Admin).await;
    create_test_user(&pool, "jack", "secret123", UserRole::Normal).await;
    let token = valid_token(admin);

    let (response, body) = send(
        setup_test_app(pool),
        get_request("/admin/users?username=jack", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["users"][0]["username"], "jack");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_category_list_coerces_pagination(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "secret123", UserRole::Admin).await;
    let token = valid_token(admin);

    let (response, body) = send(
        setup_test_app(pool),
        get_request("/admin/categories?currentPage=0&pageSize=-5", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["currentPage"], 1);
    assert_eq!(body["data"]["pagination"]["pageSize"], 5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_course_list_combines_filters(pool: PgPool) {
    let admin = create_test_user(&pool, "root", "secret123", UserRole::Admin).await;
    let token = valid_token(admin);

    let backend: i64 =
        sqlx::query_scalar("INSERT INTO categories (name) VALUES ('Backend') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    let systems: i64 =
        sqlx::query_scalar("INSERT INTO categories (name) VALUES ('Systems') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    for (category_id, name) in [
        (backend, "Rust basics"),
        (backend, "Go basics"),
        (systems, "Rust advanced"),
    ] {
        sqlx::query("INSERT INTO courses (category_id, user_id, name) VALUES ($1, $2, $3)")
            .bind(category_id)
            .bind(admin)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    let (response, body) = send(
        setup_test_app(pool),
        get_request(
            &format!("/admin/courses?categoryId={backend}&name=Rust"),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["courses"][0]["name"], "Rust basics");
}
