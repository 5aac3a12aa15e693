use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_likes, toggle_like};

pub fn init_likes_router() -> Router<AppState> {
    Router::new().route("/", get(get_likes).post(toggle_like))
}
