use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::ChapterDetailResponse;

use super::service::ChapterService;
use crate::state::AppState;
use crate::validator::ValidatedPath;

/// Chapter with its course and sibling chapters
#[utoipa::path(
    get,
    path = "/chapters/{id}",
    params(("id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter details", body = ChapterDetailResponse),
        (status = 404, description = "Chapter not found")
    ),
    tag = "Chapters"
)]
#[instrument(skip(state))]
pub async fn get_chapter(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<ChapterDetailResponse>, AppError> {
    let detail = ChapterService::get_chapter_detail(&state.db, id).await?;

    Ok(ApiResponse::ok("Chapter fetched", detail))
}
