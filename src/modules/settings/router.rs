use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{admin_get_setting, get_setting, update_setting};

pub fn init_settings_router() -> Router<AppState> {
    Router::new().route("/", get(get_setting))
}

pub fn init_admin_settings_router() -> Router<AppState> {
    Router::new().route("/", get(admin_get_setting).put(update_setting))
}
