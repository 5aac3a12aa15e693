use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{SignInDto, SignUpDto, TokenResponse, UserResponse};

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/sign_up",
    request_body = SignUpDto,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error or email/username taken")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignUpDto>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = AuthService::sign_up(&state.db, dto).await?;

    Ok(ApiResponse::created("Sign up successful", UserResponse { user }))
}

/// Sign in with email or username
#[utoipa::path(
    post,
    path = "/auth/sign_in",
    request_body = SignInDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "User not found")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignInDto>,
) -> Result<ApiResponse<TokenResponse>, AppError> {
    let token = AuthService::sign_in(&state.db, dto, &state.jwt_config, false).await?;

    Ok(ApiResponse::ok("Sign in successful", token))
}

/// Administrator sign in
#[utoipa::path(
    post,
    path = "/admin/auth/sign_in",
    request_body = SignInDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong password or not an administrator"),
        (status = 404, description = "User not found")
    ),
    tag = "Admin Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn admin_sign_in(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignInDto>,
) -> Result<ApiResponse<TokenResponse>, AppError> {
    let token = AuthService::sign_in(&state.db, dto, &state.jwt_config, true).await?;

    Ok(ApiResponse::ok("Sign in successful", token))
}
