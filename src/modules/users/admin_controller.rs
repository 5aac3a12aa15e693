use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{
    AdminCreateUserDto, AdminUpdateUserDto, PaginatedUsersResponse, UserFilterParams,
    UserResponse,
};
use coursehub_observability::track_user_created;

use crate::middleware::admin::CurrentAdmin;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/admin/users",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Users",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<UserFilterParams>,
) -> Result<ApiResponse<PaginatedUsersResponse>, AppError> {
    let users = UserService::get_users(&state.db, filters).await?;

    Ok(ApiResponse::ok("Users fetched", users))
}

#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "User not found")
    ),
    tag = "Admin Users",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;

    Ok(ApiResponse::ok("User fetched", UserResponse { user }))
}

#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = AdminCreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error or duplicate email/username"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Users",
    security(("token" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    ValidatedJson(dto): ValidatedJson<AdminCreateUserDto>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::admin_create_user(&state.db, dto).await?;

    track_user_created(if user.role.is_admin() { "admin" } else { "normal" });
    tracing::info!(admin_id = admin.id, user_id = user.id, "User created by admin");

    Ok(ApiResponse::created("User created", UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/admin/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = AdminUpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "User not found")
    ),
    tag = "Admin Users",
    security(("token" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<AdminUpdateUserDto>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::admin_update_user(&state.db, id, dto).await?;

    Ok(ApiResponse::ok("User updated", UserResponse { user }))
}
