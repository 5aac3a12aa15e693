use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{ArticleFilterParams, ArticleResponse, PaginatedArticlesResponse};

use super::service::ArticleService;
use crate::state::AppState;
use crate::validator::{ValidatedPath, ValidatedQuery};

/// Published articles. The `deleted` filter is ignored here.
#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleFilterParams),
    responses(
        (status = 200, description = "Paginated articles", body = PaginatedArticlesResponse)
    ),
    tag = "Articles"
)]
#[instrument(skip(state))]
pub async fn get_articles(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<ArticleFilterParams>,
) -> Result<ApiResponse<PaginatedArticlesResponse>, AppError> {
    let articles =
        ArticleService::get_public_articles(&state.db, filters.title.as_deref(), &filters.pagination)
            .await?;

    Ok(ApiResponse::ok("Articles fetched", articles))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = ArticleResponse),
        (status = 404, description = "Article not found")
    ),
    tag = "Articles"
)]
#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<ArticleResponse>, AppError> {
    let article = ArticleService::get_public_article(&state.db, id).await?;

    Ok(ApiResponse::ok("Article fetched", ArticleResponse { article }))
}
