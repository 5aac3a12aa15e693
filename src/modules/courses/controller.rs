use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{CourseDetailResponse, CoursesByCategoryParams, PaginatedCoursesResponse};

use super::service::CourseService;
use crate::state::AppState;
use crate::validator::{ValidatedPath, ValidatedQuery};

/// Courses of one category
#[utoipa::path(
    get,
    path = "/courses",
    params(CoursesByCategoryParams),
    responses(
        (status = 200, description = "Paginated courses", body = PaginatedCoursesResponse),
        (status = 400, description = "categoryId missing")
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CoursesByCategoryParams>,
) -> Result<ApiResponse<PaginatedCoursesResponse>, AppError> {
    let courses =
        CourseService::get_by_category(&state.db, params.category_id, &params.pagination).await?;

    Ok(ApiResponse::ok("Courses fetched", courses))
}

/// Course with its category, author and chapters
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = CourseDetailResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<CourseDetailResponse>, AppError> {
    let detail = CourseService::get_course_detail(&state.db, id).await?;

    Ok(ApiResponse::ok("Course fetched", detail))
}
