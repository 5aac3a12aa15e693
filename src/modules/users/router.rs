use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::admin_controller::{create_user, get_user, get_users, update_user};
use super::controller::{get_me, update_account, update_info};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/info", put(update_info))
        .route("/account", put(update_account))
}

pub fn init_admin_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user))
}
