use axum::{Router, routing::get};

use crate::state::AppState;

use super::{admin_controller, controller};

pub fn init_chapters_router() -> Router<AppState> {
    Router::new().route("/{id}", get(controller::get_chapter))
}

pub fn init_admin_chapters_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_controller::get_chapters).post(admin_controller::create_chapter),
        )
        .route(
            "/{id}",
            get(admin_controller::get_chapter)
                .put(admin_controller::update_chapter)
                .delete(admin_controller::delete_chapter),
        )
}
