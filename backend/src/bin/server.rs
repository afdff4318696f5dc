//! JustPark analytics HTTP server.
//!
//! Loads the configuration, optionally seeds the in-memory repository with a
//! booking export, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! JUSTPARK_BOOKINGS_FILE=data/bookings.json cargo run --bin justpark-server
//! ```
//!
//! # Environment Variables
//!
//! - `JUSTPARK_CONFIG`: Path to a `justpark.toml` (default: searched)
//! - `JUSTPARK_BOOKINGS_FILE`: Export loaded at start-up
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use justpark_analytics::config::{AppConfig, ServerSettings};
use justpark_analytics::db::{self, LocalRepository};
use justpark_analytics::http::{create_router, AppState};
use justpark_analytics::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting JustPark analytics server");

    let config = AppConfig::load().context("Failed to load configuration")?;
    let repository = Arc::new(LocalRepository::new());

    if let Some(path) = &config.data.bootstrap_file {
        let raw = io::read_export_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let stored = db::store_export(repository.as_ref(), &name, &raw)
            .await
            .with_context(|| format!("Failed to load bookings from {}", path.display()))?;
        info!(
            "Bootstrapped dataset {} with {} bookings",
            stored.info.dataset_id, stored.info.booking_count
        );
    }

    let listener = bind_listener(&config.server).await?;
    let addr = listener.local_addr()?;

    let state = AppState::new(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind `host:port`; the host may be a name such as `localhost`.
async fn bind_listener(server: &ServerSettings) -> anyhow::Result<TcpListener> {
    let addr = server.bind_address();
    TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))
}
