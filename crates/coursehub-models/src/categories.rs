use chrono::{DateTime, Utc};
use coursehub_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Ascending display order
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "rank must be a positive integer"))]
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "rank must be a positive integer"))]
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryFilterParams {
    /// Substring of the category name
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedCategoriesResponse {
    pub categories: Vec<Category>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params_flatten_pagination() {
        // Query strings reach serde as strings.
        let params: CategoryFilterParams = serde_json::from_str(
            r#"{"name":"Rust","currentPage":"0","pageSize":"-5"}"#,
        )
        .unwrap();

        assert_eq!(params.name.as_deref(), Some("Rust"));
        assert_eq!(params.pagination.current_page(), 1);
        assert_eq!(params.pagination.page_size(), 5);
    }

    #[test]
    fn test_pagination_params_is_a_schema() {
        assert_eq!(<PaginationParams as ToSchema>::name(), "PaginationParams");
    }
}
