use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{UpdateAccountDto, UpdateUserInfoDto, UserResponse};

use crate::middleware::auth::CurrentUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Profile of the caller.
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing, malformed or expired token"),
        (status = 404, description = "User no longer exists")
    ),
    tag = "Users",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::get_user(&state.db, current.id).await?;

    Ok(ApiResponse::ok("User fetched", UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/users/info",
    request_body = UpdateUserInfoDto,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing, malformed or expired token")
    ),
    tag = "Users",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn update_info(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateUserInfoDto>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::update_info(&state.db, current.id, dto).await?;

    Ok(ApiResponse::ok("User info updated", UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/users/account",
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = UserResponse),
        (status = 400, description = "Validation error or wrong current password"),
        (status = 401, description = "Missing, malformed or expired token")
    ),
    tag = "Users",
    security(("token" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_account(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateAccountDto>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = UserService::update_account(&state.db, current.id, dto).await?;

    Ok(ApiResponse::ok("Account updated", UserResponse { user }))
}
