//! Article models. Articles are soft deleted through `deleted_at`.

use chrono::{DateTime, Utc};
use coursehub_core::serde::deserialize_optional_bool;
use coursehub_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateArticleDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Target of the batch delete, restore and force delete operations.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ArticleIdsDto {
    #[validate(length(min = 1, message = "ids must not be empty"))]
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleFilterParams {
    /// Substring of the title
    pub title: Option<String>,
    /// `true` lists the trash (soft deleted articles) instead
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedArticlesResponse {
    pub articles: Vec<Article>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AffectedRowsResponse {
    pub affected: u64,
}
