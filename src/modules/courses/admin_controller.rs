use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError, EmptyData};
use coursehub_models::{
    AdminCourseFilterParams, CourseResponse, CreateCourseDto, PaginatedCoursesResponse,
    UpdateCourseDto,
};

use super::service::CourseService;
use crate::middleware::admin::CurrentAdmin;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/admin/courses",
    params(AdminCourseFilterParams),
    responses(
        (status = 200, description = "Paginated courses", body = PaginatedCoursesResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Courses",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<AdminCourseFilterParams>,
) -> Result<ApiResponse<PaginatedCoursesResponse>, AppError> {
    let courses = CourseService::get_courses(&state.db, filters).await?;

    Ok(ApiResponse::ok("Courses fetched", courses))
}

#[utoipa::path(
    get,
    path = "/admin/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course", body = CourseResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    tag = "Admin Courses",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<CourseResponse>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;

    Ok(ApiResponse::ok("Course fetched", CourseResponse { course }))
}

/// Create a course authored by the calling administrator
#[utoipa::path(
    post,
    path = "/admin/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Courses",
    security(("token" = []))
)]
#[instrument(skip(state, admin))]
pub async fn create_course(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<ApiResponse<CourseResponse>, AppError> {
    let course = CourseService::create_course(&state.db, admin.id, dto).await?;

    Ok(ApiResponse::created("Course created", CourseResponse { course }))
}

#[utoipa::path(
    put,
    path = "/admin/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Validation error or unknown category"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    tag = "Admin Courses",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn update_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<ApiResponse<CourseResponse>, AppError> {
    let course = CourseService::update_course(&state.db, id, dto).await?;

    Ok(ApiResponse::ok("Course updated", CourseResponse { course }))
}

#[utoipa::path(
    delete,
    path = "/admin/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted", body = EmptyData),
        (status = 400, description = "Course still has chapters"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    tag = "Admin Courses",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<EmptyData>, AppError> {
    CourseService::delete_course(&state.db, id).await?;

    Ok(ApiResponse::message("Course deleted"))
}
