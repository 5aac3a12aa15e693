use anyhow::Context;
use axum::extract::State;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use coursehub_core::{ApiResponse, AppError};

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub database: String,
}

/// Liveness check that also pings the database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<ApiResponse<HealthResponse>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .context("Database health check failed")
        .map_err(AppError::internal)?;

    Ok(ApiResponse::ok(
        "OK",
        HealthResponse {
            database: "up".to_string(),
        },
    ))
}
