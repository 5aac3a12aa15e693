use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use coursehub::router::init_router;
use coursehub::state::init_app_state;
use coursehub_config::ServerConfig;
use coursehub_observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let state = init_app_state().await?;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("Failed to run database migrations")?;

    let metrics = init_metrics()?;
    let app = init_router(state, metrics);

    let server = ServerConfig::from_env();
    let address = server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
