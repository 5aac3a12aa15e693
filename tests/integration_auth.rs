mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_user, generate_unique_name, json_request, send, setup_offline_app, setup_test_app,
};
use coursehub_models::UserRole;
use serde_json::json;
use sqlx::PgPool;

#[tokio::test]
async fn test_sign_up_rejects_invalid_fields() {
    let app = setup_offline_app();

    let request = json_request(
        "POST",
        "/auth/sign_up",
        json!({
            "email": "not-an-email",
            "username": "a",
            "nickname": "Alice",
            "password": "123"
        }),
    );
    let (response, body) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Validation error");

    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e.as_str())
        .collect();
    assert!(errors.contains(&"email is invalid"));
    assert!(errors.contains(&"username must be between 2 and 45 characters"));
    assert!(errors.contains(&"password must be between 6 and 45 characters"));
}

#[tokio::test]
async fn test_sign_up_missing_field() {
    let app = setup_offline_app();

    let request = json_request(
        "POST",
        "/auth/sign_up",
        json!({ "email": "a@b.com", "username": "alice", "nickname": "Alice" }),
    );
    let (response, body) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Wrong Request Parameters");
    assert_eq!(body["errors"][0], "password is required");
}

#[tokio::test]
async fn test_sign_in_requires_json_content_type() {
    let app = setup_offline_app();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/sign_in")
        .body(Body::from(r#"{"login":"alice","password":"secret123"}"#))
        .unwrap();
    let (response, body) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"][0],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_sign_in_rejects_blank_credentials() {
    let app = setup_offline_app();

    let request = json_request("POST", "/admin/auth/sign_in", json!({ "login": "", "password": "" }));
    let (response, body) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_sign_up_then_sign_in(pool: PgPool) {
    let username = generate_unique_name("user");
    let email = format!("{}@coursehub.test", username);

    let request = json_request(
        "POST",
        "/auth/sign_up",
        json!({
            "email": email,
            "username": username,
            "nickname": "Newcomer",
            "password": "secret123"
        }),
    );
    let (response, body) = send(setup_test_app(pool.clone()), request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["user"]["email"], email);
    assert_eq!(body["data"]["user"]["sex"], 2);
    assert_eq!(body["data"]["user"]["role"], 0);
    assert!(body["data"]["user"].get("password").is_none());

    let request = json_request(
        "POST",
        "/auth/sign_in",
        json!({ "login": username, "password": "secret123" }),
    );
    let (response, body) = send(setup_test_app(pool), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_sign_up_duplicate_email(pool: PgPool) {
    create_test_user(&pool, "taken", "secret123", UserRole::Normal).await;

    let request = json_request(
        "POST",
        "/auth/sign_up",
        json!({
            "email": "taken@coursehub.test",
            "username": "someone_else",
            "nickname": "Someone",
            "password": "secret123"
        }),
    );
    let (response, body) = send(setup_test_app(pool), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], "email already exists");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_sign_in_failures(pool: PgPool) {
    create_test_user(&pool, "frank", "secret123", UserRole::Normal).await;

    let request = json_request(
        "POST",
        "/auth/sign_in",
        json!({ "login": "nobody", "password": "secret123" }),
    );
    let (response, body) = send(setup_test_app(pool.clone()), request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body["errors"][0], "User not found");

    let request = json_request(
        "POST",
        "/auth/sign_in",
        json!({ "login": "frank", "password": "wrong-password" }),
    );
    let (response, body) = send(setup_test_app(pool), request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Verification failed");
    assert_eq!(body["errors"][0], "Wrong password");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_sign_in_requires_admin_role(pool: PgPool) {
    create_test_user(&pool, "grace", "secret123", UserRole::Normal).await;
    create_test_user(&pool, "root", "secret123", UserRole::Admin).await;

    let request = json_request(
        "POST",
        "/admin/auth/sign_in",
        json!({ "login": "grace", "password": "secret123" }),
    );
    let (response, body) = send(setup_test_app(pool.clone()), request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"][0], "not authorized as admin");

    let request = json_request(
        "POST",
        "/admin/auth/sign_in",
        json!({ "login": "root@coursehub.test", "password": "secret123" }),
    );
    let (response, body) = send(setup_test_app(pool), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body["data"]["token"].is_string());
}
