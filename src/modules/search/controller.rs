use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{PaginatedCoursesResponse, SearchParams};

use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// Search courses by name. Without `name` every course is listed.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching courses", body = PaginatedCoursesResponse)
    ),
    tag = "Search"
)]
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> Result<ApiResponse<PaginatedCoursesResponse>, AppError> {
    let courses =
        CourseService::search(&state.db, params.name.as_deref(), &params.pagination).await?;

    Ok(ApiResponse::ok("Search results fetched", courses))
}
