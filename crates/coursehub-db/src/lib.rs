//! # CourseHub DB
//!
//! Database pool initialization and rendering of
//! [`QuerySpec`](coursehub_core::QuerySpec) values into SQL.
//!
//! # Example
//!
//! ```ignore
//! use coursehub_config::DatabaseConfig;
//! use coursehub_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//!     Ok(())
//! }
//! ```

pub mod query;

use std::time::Duration;

use coursehub_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use query::{fetch_page, push_order_and_page, push_where};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be stored in the
/// application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}
