use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError, EmptyData};
use coursehub_models::{
    AffectedRowsResponse, ArticleFilterParams, ArticleIdsDto, ArticleResponse, CreateArticleDto,
    PaginatedArticlesResponse, UpdateArticleDto,
};

use super::service::ArticleService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/admin/articles",
    params(ArticleFilterParams),
    responses(
        (status = 200, description = "Paginated articles or trash", body = PaginatedArticlesResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_articles(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<ArticleFilterParams>,
) -> Result<ApiResponse<PaginatedArticlesResponse>, AppError> {
    let articles = ArticleService::get_articles(&state.db, filters).await?;

    Ok(ApiResponse::ok("Articles fetched", articles))
}

#[utoipa::path(
    get,
    path = "/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article, trashed or not", body = ArticleResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Article not found")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<ArticleResponse>, AppError> {
    let article = ArticleService::get_article(&state.db, id).await?;

    Ok(ApiResponse::ok("Article fetched", ArticleResponse { article }))
}

#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_article(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateArticleDto>,
) -> Result<ApiResponse<ArticleResponse>, AppError> {
    let article = ArticleService::create_article(&state.db, dto).await?;

    Ok(ApiResponse::created("Article created", ArticleResponse { article }))
}

#[utoipa::path(
    put,
    path = "/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article ID")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Article not found")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_article(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateArticleDto>,
) -> Result<ApiResponse<ArticleResponse>, AppError> {
    let article = ArticleService::update_article(&state.db, id, dto).await?;

    Ok(ApiResponse::ok("Article updated", ArticleResponse { article }))
}

/// Move one article to the trash
#[utoipa::path(
    delete,
    path = "/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article trashed", body = EmptyData),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Article not found or already trashed")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_article(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<EmptyData>, AppError> {
    ArticleService::delete_article(&state.db, id).await?;

    Ok(ApiResponse::message("Article deleted"))
}

#[utoipa::path(
    post,
    path = "/admin/articles/delete",
    request_body = ArticleIdsDto,
    responses(
        (status = 200, description = "Articles trashed", body = AffectedRowsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_articles(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ArticleIdsDto>,
) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
    let affected = ArticleService::delete_articles(&state.db, &dto.ids).await?;

    Ok(ApiResponse::ok(
        "Articles deleted",
        AffectedRowsResponse { affected },
    ))
}

#[utoipa::path(
    post,
    path = "/admin/articles/restore",
    request_body = ArticleIdsDto,
    responses(
        (status = 200, description = "Articles restored", body = AffectedRowsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn restore_articles(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ArticleIdsDto>,
) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
    let affected = ArticleService::restore_articles(&state.db, &dto.ids).await?;

    Ok(ApiResponse::ok(
        "Articles restored",
        AffectedRowsResponse { affected },
    ))
}

#[utoipa::path(
    post,
    path = "/admin/articles/force_delete",
    request_body = ArticleIdsDto,
    responses(
        (status = 200, description = "Articles permanently deleted", body = AffectedRowsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Articles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn force_delete_articles(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ArticleIdsDto>,
) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
    let affected = ArticleService::force_delete_articles(&state.db, &dto.ids).await?;

    Ok(ApiResponse::ok(
        "Articles permanently deleted",
        AffectedRowsResponse { affected },
    ))
}
