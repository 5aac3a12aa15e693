use anyhow::Context;
use sqlx::PgPool;

use coursehub_config::{CorsConfig, DatabaseConfig, JwtConfig};
use coursehub_db::init_db_pool;

/// Shared, read-only request state. Cloned per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let db = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;

    Ok(AppState::new(db, JwtConfig::from_env(), CorsConfig::from_env()))
}
