use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{admin_sign_in, sign_in, sign_up};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/sign_up", post(sign_up))
        .route("/sign_in", post(sign_in))
}

pub fn init_admin_auth_router() -> Router<AppState> {
    Router::new().route("/sign_in", post(admin_sign_in))
}
