use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::{admin_controller, controller};

pub fn init_articles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::get_articles))
        .route("/{id}", get(controller::get_article))
}

pub fn init_admin_articles_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_controller::get_articles).post(admin_controller::create_article),
        )
        .route("/delete", post(admin_controller::delete_articles))
        .route("/restore", post(admin_controller::restore_articles))
        .route("/force_delete", post(admin_controller::force_delete_articles))
        .route(
            "/{id}",
            get(admin_controller::get_article)
                .put(admin_controller::update_article)
                .delete(admin_controller::delete_article),
        )
}
