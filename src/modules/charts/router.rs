use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{sex_chart, user_chart};

pub fn init_admin_charts_router() -> Router<AppState> {
    Router::new()
        .route("/sex", get(sex_chart))
        .route("/user", get(user_chart))
}
