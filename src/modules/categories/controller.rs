use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::CategoriesResponse;

use super::service::CategoryService;
use crate::state::AppState;

/// All categories in display order
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories ordered by rank", body = CategoriesResponse)
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<ApiResponse<CategoriesResponse>, AppError> {
    let categories = CategoryService::get_all(&state.db).await?;

    Ok(ApiResponse::ok(
        "Categories fetched",
        CategoriesResponse { categories },
    ))
}
