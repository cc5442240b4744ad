// src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use status_poller::{
    config,
    health::StatusPoller,
    indicator::{LogIndicator, DB_STATUS_ID, SERVER_STATUS_ID},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("status_poller=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let labels = config.locale.labels();
    let server = Arc::new(LogIndicator::new(SERVER_STATUS_ID, labels.unknown));
    let database = Arc::new(LogIndicator::new(DB_STATUS_ID, labels.unknown));

    let poller = Arc::new(StatusPoller::from_config(&config, server, database)?);
    info!("Polling {}", poller.health_url());

    let task = poller.start();

    shutdown_signal().await;
    task.stop();
    task.join().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
