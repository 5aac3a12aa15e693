use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::HomeResponse;

use crate::modules::courses::service::CourseService;
use crate::state::AppState;

/// Size of each homepage list.
const FEED_SIZE: i64 = 10;

/// Homepage feed: recommended, most liked and introductory courses
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Homepage feed", body = HomeResponse)),
    tag = "Home"
)]
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<ApiResponse<HomeResponse>, AppError> {
    let (recommended_courses, likes_courses, introductory_courses) = tokio::try_join!(
        CourseService::recommended(&state.db, FEED_SIZE),
        CourseService::most_liked(&state.db, FEED_SIZE),
        CourseService::introductory(&state.db, FEED_SIZE),
    )?;

    Ok(ApiResponse::ok(
        "Home fetched",
        HomeResponse {
            recommended_courses,
            likes_courses,
            introductory_courses,
        },
    ))
}
