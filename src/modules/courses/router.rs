use axum::{Router, routing::get};

use crate::state::AppState;

use super::{admin_controller, controller};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::get_courses))
        .route("/{id}", get(controller::get_course))
}

pub fn init_admin_courses_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_controller::get_courses).post(admin_controller::create_course),
        )
        .route(
            "/{id}",
            get(admin_controller::get_course)
                .put(admin_controller::update_course)
                .delete(admin_controller::delete_course),
        )
}
