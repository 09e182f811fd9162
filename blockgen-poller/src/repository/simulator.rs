//! Simulator repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use blockgen_client::SimulatorClient;
use blockgen_core::dto::SimulatorResponse;

/// Anything that can ask the simulator for new blocks
#[async_trait]
pub trait BlockGenerator: Send + Sync {
    /// Requests `count` blocks
    ///
    /// Returns the response for any HTTP status. An error means no
    /// response was received at all.
    async fn generate_blocks(&self, count: u32) -> Result<SimulatorResponse>;
}

#[async_trait]
impl BlockGenerator for SimulatorClient {
    async fn generate_blocks(&self, count: u32) -> Result<SimulatorResponse> {
        SimulatorClient::generate_blocks(self, count)
            .await
            .context("Failed to send generate-blocks request")
    }
}
