use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError, PaginationParams};
use coursehub_models::{LikeToggleResponse, PaginatedCoursesResponse, ToggleLikeDto};

use super::service::LikeService;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Like or unlike a course
#[utoipa::path(
    post,
    path = "/likes",
    request_body = ToggleLikeDto,
    responses(
        (status = 200, description = "Like state after the toggle", body = LikeToggleResponse),
        (status = 401, description = "Missing, malformed or expired token"),
        (status = 404, description = "Course not found")
    ),
    tag = "Likes",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn toggle_like(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(dto): ValidatedJson<ToggleLikeDto>,
) -> Result<ApiResponse<LikeToggleResponse>, AppError> {
    let result = LikeService::toggle_like(&state.db, current.id, dto.course_id).await?;
    let message = if result.liked {
        "Course liked"
    } else {
        "Course unliked"
    };

    Ok(ApiResponse::ok(message, result))
}

#[utoipa::path(
    get,
    path = "/likes",
    params(PaginationParams),
    responses(
        (status = 200, description = "Liked courses", body = PaginatedCoursesResponse),
        (status = 401, description = "Missing, malformed or expired token")
    ),
    tag = "Likes",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_likes(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
) -> Result<ApiResponse<PaginatedCoursesResponse>, AppError> {
    let courses = LikeService::get_liked_courses(&state.db, current.id, &pagination).await?;

    Ok(ApiResponse::ok("Liked courses fetched", courses))
}
