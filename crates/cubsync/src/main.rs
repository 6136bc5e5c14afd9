//! Binary entry point: init logging, read config, run one sync.

#![deny(unsafe_code)]

use cubsync::{SyncConfig, run_sync};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_sync(&config).await {
        tracing::error!(error = %e, "sync failed");
        std::process::exit(1);
    }
}
