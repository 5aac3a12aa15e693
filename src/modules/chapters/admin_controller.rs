use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError, EmptyData};
use coursehub_models::{
    ChapterFilterParams, ChapterResponse, CreateChapterDto, PaginatedChaptersResponse,
    UpdateChapterDto,
};

use super::service::ChapterService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/admin/chapters",
    params(ChapterFilterParams),
    responses(
        (status = 200, description = "Paginated chapters of a course", body = PaginatedChaptersResponse),
        (status = 400, description = "courseId missing"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Chapters",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_chapters(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<ChapterFilterParams>,
) -> Result<ApiResponse<PaginatedChaptersResponse>, AppError> {
    let chapters = ChapterService::get_chapters(&state.db, filters).await?;

    Ok(ApiResponse::ok("Chapters fetched", chapters))
}

#[utoipa::path(
    get,
    path = "/admin/chapters/{id}",
    params(("id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter", body = ChapterResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Chapter not found")
    ),
    tag = "Admin Chapters",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_chapter(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<ChapterResponse>, AppError> {
    let chapter = ChapterService::get_chapter(&state.db, id).await?;

    Ok(ApiResponse::ok("Chapter fetched", ChapterResponse { chapter }))
}

#[utoipa::path(
    post,
    path = "/admin/chapters",
    request_body = CreateChapterDto,
    responses(
        (status = 201, description = "Chapter created", body = ChapterResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Course not found")
    ),
    tag = "Admin Chapters",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn create_chapter(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateChapterDto>,
) -> Result<ApiResponse<ChapterResponse>, AppError> {
    let chapter = ChapterService::create_chapter(&state.db, dto).await?;

    Ok(ApiResponse::created("Chapter created", ChapterResponse { chapter }))
}

#[utoipa::path(
    put,
    path = "/admin/chapters/{id}",
    params(("id" = i64, Path, description = "Chapter ID")),
    request_body = UpdateChapterDto,
    responses(
        (status = 200, description = "Chapter updated", body = ChapterResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Chapter not found")
    ),
    tag = "Admin Chapters",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn update_chapter(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateChapterDto>,
) -> Result<ApiResponse<ChapterResponse>, AppError> {
    let chapter = ChapterService::update_chapter(&state.db, id, dto).await?;

    Ok(ApiResponse::ok("Chapter updated", ChapterResponse { chapter }))
}

#[utoipa::path(
    delete,
    path = "/admin/chapters/{id}",
    params(("id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter deleted", body = EmptyData),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Chapter not found")
    ),
    tag = "Admin Chapters",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_chapter(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<EmptyData>, AppError> {
    ChapterService::delete_chapter(&state.db, id).await?;

    Ok(ApiResponse::message("Chapter deleted"))
}
