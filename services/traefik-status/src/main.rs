//! traefik-status CLI
//!
//! Serves the cached up/down status of Traefik backend services.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use traefik_status::{load_config, Config};

#[derive(Parser)]
#[command(name = "traefik-status")]
#[command(about = "Cached up/down status of Traefik backend services")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Status API port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.apply_env_overrides();

    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting traefik-status service");
    tracing::debug!(
        "Traefik API: {}, monitored services: {}",
        config.traefik.api_url,
        config.services.len()
    );

    traefik_status::run(config).await?;

    Ok(())
}
