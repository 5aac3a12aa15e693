use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError, EmptyData};
use coursehub_models::{
    CategoryFilterParams, CategoryResponse, CreateCategoryDto, PaginatedCategoriesResponse,
    UpdateCategoryDto,
};

use super::service::CategoryService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/admin/categories",
    params(CategoryFilterParams),
    responses(
        (status = 200, description = "Paginated categories", body = PaginatedCategoriesResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Categories",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<CategoryFilterParams>,
) -> Result<ApiResponse<PaginatedCategoriesResponse>, AppError> {
    let categories = CategoryService::get_categories(&state.db, filters).await?;

    Ok(ApiResponse::ok("Categories fetched", categories))
}

#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Category not found")
    ),
    tag = "Admin Categories",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<CategoryResponse>, AppError> {
    let category = CategoryService::get_category(&state.db, id).await?;

    Ok(ApiResponse::ok("Category fetched", CategoryResponse { category }))
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Categories",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<ApiResponse<CategoryResponse>, AppError> {
    let category = CategoryService::create_category(&state.db, dto).await?;

    Ok(ApiResponse::created("Category created", CategoryResponse { category }))
}

#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Category not found")
    ),
    tag = "Admin Categories",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateCategoryDto>,
) -> Result<ApiResponse<CategoryResponse>, AppError> {
    let category = CategoryService::update_category(&state.db, id, dto).await?;

    Ok(ApiResponse::ok("Category updated", CategoryResponse { category }))
}

#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = EmptyData),
        (status = 400, description = "Category still has courses"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Category not found")
    ),
    tag = "Admin Categories",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<EmptyData>, AppError> {
    CategoryService::delete_category(&state.db, id).await?;

    Ok(ApiResponse::message("Category deleted"))
}
