//! Serves the Lynkdesk HTTP API backed by `PostgreSQL`.
//!
//! Configuration is read from the environment; see [`lynkdesk::config`].
//! The schema under `migrations/` must already be applied.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use lynkdesk::api::{ApiState, router};
use lynkdesk::config::ServerConfig;
use lynkdesk::task::adapters::postgres::{
    PostgresApplicationDirectory, PostgresTaskRepository, TaskPgPool,
};
use mockable::DefaultClock;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lynkdesk=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "starting lynkdesk");

    let pool = build_pool(&config)?;
    let mut state = ApiState::new(
        Arc::new(PostgresApplicationDirectory::new(pool.clone())),
        Arc::new(PostgresTaskRepository::new(pool)),
        Arc::new(DefaultClock),
    );
    if let Some(api_key) = config.api_key.as_deref() {
        state = state.with_api_key(api_key);
    } else {
        tracing::warn!("no API key configured; bearer validation is left to the hosting platform");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "lynkdesk listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lynkdesk shut down cleanly");
    Ok(())
}

fn build_pool(config: &ServerConfig) -> Result<TaskPgPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    let pool = Pool::builder()
        .max_size(config.pool_size)
        .build(manager)?;
    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
