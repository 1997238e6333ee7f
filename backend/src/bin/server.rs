//! Studio Scheduler HTTP Server Binary
//!
//! Loads configuration, creates the in-memory store, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin studio-server
//!
//! # With an explicit config file
//! STUDIO_CONFIG=./studio.toml cargo run --bin studio-server
//! ```
//!
//! # Environment Variables
//!
//! - `STUDIO_CONFIG`: Path to a TOML config file (default: search for `studio.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: `[logging] level` from config, else info)
//!
//! A `.env` file in the working directory is loaded first if present.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use studio_scheduler::config::ServerConfig;
use studio_scheduler::db::{FullRepository, LocalRepository};
use studio_scheduler::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Studio Scheduler HTTP Server");

    // One store for the whole process, shared by every request
    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    let state = AppState::new(repository).with_body_limit(config.server.body_limit_bytes);

    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
