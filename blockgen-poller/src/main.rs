//! Blockgen Poller
//!
//! Keeps a local block-generation simulator moving by asking it for new
//! blocks on a fixed cadence.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - Repository: the simulator behind the `BlockGenerator` trait
//! - Scheduler: the poll loop, one request per cycle
//!
//! The poller never stops on its own. Errors from the simulator are logged
//! and the next cycle runs as usual.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::BlockGenerator;
use crate::scheduler::BlockPoller;
use blockgen_client::SimulatorClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockgen_poller=info,blockgen_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Blockgen Poller");

    let config = load_config()?;
    info!(
        "Loaded configuration: target_url={}, poll_interval={:?}, request_timeout={:?}",
        config.target_url(),
        config.poll_interval,
        config.request_timeout
    );

    let client = build_client(&config)?;
    let generator: Arc<dyn BlockGenerator> = Arc::new(client);

    let poller = BlockPoller::new(config, generator);
    poller.run().await;

    Ok(())
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Builds the simulator client, bounded by the request timeout if one is set
fn build_client(config: &Config) -> Result<SimulatorClient> {
    match config.request_timeout {
        Some(timeout) => SimulatorClient::with_timeout(config.simulator_url.clone(), timeout)
            .context("Failed to build simulator client"),
        None => Ok(SimulatorClient::new(config.simulator_url.clone())),
    }
}
