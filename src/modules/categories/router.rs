use axum::{Router, routing::get};

use crate::state::AppState;

use super::{admin_controller, controller};

pub fn init_categories_router() -> Router<AppState> {
    Router::new().route("/", get(controller::get_categories))
}

pub fn init_admin_categories_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_controller::get_categories).post(admin_controller::create_category),
        )
        .route(
            "/{id}",
            get(admin_controller::get_category)
                .put(admin_controller::update_category)
                .delete(admin_controller::delete_category),
        )
}
