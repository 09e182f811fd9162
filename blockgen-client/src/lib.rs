//! Blockgen HTTP Client
//!
//! A small, typed HTTP client for driving a local block-generation simulator.
//!
//! # Example
//!
//! ```no_run
//! use blockgen_client::SimulatorClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SimulatorClient::new("http://localhost:8085");
//!
//!     let response = client.generate_blocks(1).await?;
//!     println!("Simulator answered {}: {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

mod blocks;
pub mod error;

// Re-export commonly used types
pub use blockgen_core::dto::SimulatorResponse;
pub use error::{ClientError, Result};

use reqwest::Client;
use std::time::Duration;

/// HTTP client for the simulator API
#[derive(Debug, Clone)]
pub struct SimulatorClient {
    /// Base URL of the simulator (e.g., "http://localhost:8085")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SimulatorClient {
    /// Create a new simulator client
    ///
    /// The underlying HTTP client has no request timeout, so a simulator
    /// that never answers blocks the caller indefinitely. Use
    /// [`SimulatorClient::with_timeout`] to bound it.
    ///
    /// # Example
    /// ```
    /// use blockgen_client::SimulatorClient;
    ///
    /// let client = SimulatorClient::new("http://localhost:8085");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new simulator client with a custom HTTP client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the simulator
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a new simulator client whose requests fail after `timeout`
    ///
    /// # Example
    /// ```
    /// use blockgen_client::SimulatorClient;
    /// use std::time::Duration;
    ///
    /// let client = SimulatorClient::with_timeout("http://localhost:8085", Duration::from_secs(10))
    ///     .unwrap();
    /// ```
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Get the base URL of the simulator
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
