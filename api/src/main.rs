use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod middleware;
mod routes;
mod service;
mod state;
#[cfg(test)]
mod test_util;

use common::config::Settings;
use common::db::repositories::PostRepository;
use common::db::DbPool;
use common::telemetry;
use service::PostService;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Settings::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize logging; mode is selected by the ENV variable
    telemetry::init_logging(&config.env, &config.observability.log_level)?;
    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Initialize database connection pool; retries internally and is fatal
    // on exhaustion, so the process never serves traffic without a pool
    let db_pool = DbPool::connect(&config.database).await?;

    // Initialize Prometheus metrics exporter
    let metrics_handle = telemetry::init_metrics()?;
    tracing::info!("Metrics exporter initialized");

    // Wire handler → service → repository
    let repository = PostRepository::new(db_pool.clone());
    let post_service = PostService::new(Arc::new(repository));
    let state = AppState::new(post_service, metrics_handle);

    // Create router
    let app = routes::create_router(state);

    // Start server
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("API server stopped");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Initiating graceful shutdown");
}
