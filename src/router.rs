use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use coursehub_observability::{
    PrometheusHandle, logging_middleware, metrics_app, metrics_middleware,
};

use crate::docs::ApiDoc;
use crate::middleware::admin::require_admin;
use crate::middleware::auth::{TOKEN_HEADER, require_user};
use crate::modules::articles::{init_admin_articles_router, init_articles_router};
use crate::modules::auth::{init_admin_auth_router, init_auth_router};
use crate::modules::categories::{init_admin_categories_router, init_categories_router};
use crate::modules::chapters::{init_admin_chapters_router, init_chapters_router};
use crate::modules::charts::init_admin_charts_router;
use crate::modules::courses::{init_admin_courses_router, init_courses_router};
use crate::modules::health::init_health_router;
use crate::modules::home::init_home_router;
use crate::modules::likes::init_likes_router;
use crate::modules::search::init_search_router;
use crate::modules::settings::{init_admin_settings_router, init_settings_router};
use crate::modules::users::{init_admin_users_router, init_users_router};
use crate::state::AppState;

/// Admin routes. Everything except `/auth` requires an administrator.
fn init_admin_router(state: &AppState) -> Router<AppState> {
    let admin_only = || middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .nest("/auth", init_admin_auth_router())
        .nest("/articles", init_admin_articles_router().route_layer(admin_only()))
        .nest("/categories", init_admin_categories_router().route_layer(admin_only()))
        .nest("/courses", init_admin_courses_router().route_layer(admin_only()))
        .nest("/chapters", init_admin_chapters_router().route_layer(admin_only()))
        .nest("/users", init_admin_users_router().route_layer(admin_only()))
        .nest("/settings", init_admin_settings_router().route_layer(admin_only()))
        .nest("/charts", init_admin_charts_router().route_layer(admin_only()))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static(TOKEN_HEADER),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allow_credentials(true)
}

pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let user_only = || middleware::from_fn_with_state(state.clone(), require_user);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_home_router())
        .nest("/health", init_health_router())
        .nest("/categories", init_categories_router())
        .nest("/courses", init_courses_router())
        .nest("/chapters", init_chapters_router())
        .nest("/articles", init_articles_router())
        .nest("/settings", init_settings_router())
        .nest("/search", init_search_router())
        .nest("/auth", init_auth_router())
        .nest("/users", init_users_router().route_layer(user_only()))
        .nest("/likes", init_likes_router().route_layer(user_only()))
        .nest("/admin", init_admin_router(&state))
        .with_state(state.clone());

    if let Some(handle) = metrics {
        router = router.merge(metrics_app(handle));
    }

    router
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
