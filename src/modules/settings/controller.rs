use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{SettingResponse, UpdateSettingDto};

use super::service::SettingService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/settings",
    responses((status = 200, description = "Site settings", body = SettingResponse)),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_setting(
    State(state): State<AppState>,
) -> Result<ApiResponse<SettingResponse>, AppError> {
    let setting = SettingService::get_setting(&state.db).await?;

    Ok(ApiResponse::ok("Settings fetched", SettingResponse { setting }))
}

#[utoipa::path(
    get,
    path = "/admin/settings",
    responses(
        (status = 200, description = "Site settings", body = SettingResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Settings",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn admin_get_setting(
    State(state): State<AppState>,
) -> Result<ApiResponse<SettingResponse>, AppError> {
    get_setting(State(state)).await
}

#[utoipa::path(
    put,
    path = "/admin/settings",
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Settings updated", body = SettingResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Settings",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn update_setting(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateSettingDto>,
) -> Result<ApiResponse<SettingResponse>, AppError> {
    let setting = SettingService::update_setting(&state.db, dto).await?;

    Ok(ApiResponse::ok("Settings updated", SettingResponse { setting }))
}
