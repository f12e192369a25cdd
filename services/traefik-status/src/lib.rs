//! traefik-status - Cached backend health from the Traefik API
//!
//! Polls Traefik's service listing on demand, classifies each monitored
//! service as up or down, and serves the cached result as JSON.

pub mod cache;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod io;
pub mod registry;

pub use cache::{SnapshotCache, StatusSnapshot, CACHE_TTL};
pub use classifier::{classify, ServiceStatus, ServiceView};
pub use config::{load_config, Config};
pub use controller::RefreshController;
pub use error::{FetchError, Result, TraefikStatusError};
pub use registry::{MonitoredService, Registry};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clock::SystemClock;
use crate::fetcher::HealthFetcher;
use crate::io::ReqwestHttpClient;

/// Wire the production HTTP client, fetcher and clock into a controller
pub fn build_controller(config: &Config) -> Result<RefreshController> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new(config.traefik.timeout)?);
    let fetcher = HealthFetcher::from_config(&config.traefik, http);
    Ok(RefreshController::new(
        config.registry(),
        fetcher,
        Arc::new(SystemClock),
    ))
}

/// Run the status API with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let controller = Arc::new(build_controller(&config)?);
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        TraefikStatusError::Server(format!("Failed to bind port {}: {}", config.server.port, e))
    })?;
    tracing::info!("Status API listening on http://{}", addr);

    let router = dashboard::build_router(controller);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| TraefikStatusError::Server(e.to_string()))?;

    tracing::info!("Status API stopped");
    Ok(())
}
