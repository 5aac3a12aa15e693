use axum::extract::State;
use tracing::instrument;

use coursehub_core::{ApiResponse, AppError};
use coursehub_models::{MonthlyUsersResponse, SexChartResponse};

use super::service::ChartService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/admin/charts/sex",
    responses(
        (status = 200, description = "User count per sex", body = SexChartResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Charts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn sex_chart(
    State(state): State<AppState>,
) -> Result<ApiResponse<SexChartResponse>, AppError> {
    let data = ChartService::users_by_sex(&state.db).await?;

    Ok(ApiResponse::ok("Chart fetched", SexChartResponse { data }))
}

#[utoipa::path(
    get,
    path = "/admin/charts/user",
    responses(
        (status = 200, description = "Registrations per month", body = MonthlyUsersResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Admin Charts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn user_chart(
    State(state): State<AppState>,
) -> Result<ApiResponse<MonthlyUsersResponse>, AppError> {
    let data = ChartService::users_by_month(&state.db).await?;

    Ok(ApiResponse::ok("Chart fetched", MonthlyUsersResponse { data }))
}
