//! Poller configuration
//!
//! Defines where the simulator lives, how many blocks to ask for and how
//! often, and how long a single request may take.

use blockgen_core::endpoint::{
    DEFAULT_BLOCKS_PER_CYCLE, DEFAULT_SIMULATOR_URL, generate_blocks_url,
};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Poller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Simulator base URL (e.g., "http://localhost:8085")
    pub simulator_url: String,

    /// Number of blocks requested per cycle
    pub blocks_per_cycle: u32,

    /// Pause between the end of one request and the start of the next
    pub poll_interval: Duration,

    /// Upper bound on a single request, `None` to wait forever
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a new configuration with defaults for everything but the URL
    pub fn new(simulator_url: String) -> Self {
        Self {
            simulator_url,
            blocks_per_cycle: DEFAULT_BLOCKS_PER_CYCLE,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            request_timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables, all optional:
    /// - SIMULATOR_URL (default: http://localhost:8085)
    /// - BLOCKS_PER_CYCLE (default: 1)
    /// - POLL_INTERVAL (seconds, default: 1)
    /// - REQUEST_TIMEOUT (seconds, 0 disables the timeout, default: 10)
    ///
    /// Values that fail to parse fall back to their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let simulator_url = lookup("SIMULATOR_URL").unwrap_or(defaults.simulator_url);

        let blocks_per_cycle = lookup("BLOCKS_PER_CYCLE")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.blocks_per_cycle);

        let poll_interval = lookup("POLL_INTERVAL")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);

        let request_timeout = match lookup("REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.request_timeout,
        };

        Self {
            simulator_url,
            blocks_per_cycle,
            poll_interval,
            request_timeout,
        }
    }

    /// Full URL hit on every cycle
    pub fn target_url(&self) -> String {
        generate_blocks_url(&self.simulator_url, self.blocks_per_cycle)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.simulator_url.is_empty() {
            anyhow::bail!("simulator_url cannot be empty");
        }

        if !self.simulator_url.starts_with("http://") && !self.simulator_url.starts_with("https://")
        {
            anyhow::bail!("simulator_url must start with http:// or https://");
        }

        if self.blocks_per_cycle == 0 {
            anyhow::bail!("blocks_per_cycle must be greater than 0");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATOR_URL.to_string())
    }
}
