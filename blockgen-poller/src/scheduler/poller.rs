//! Block poller
//!
//! Asks the simulator for blocks, logs what happened, sleeps, repeats.
//! Every failure is absorbed into a [`CycleOutcome`] so the loop never ends
//! on its own.

use blockgen_core::domain::CycleOutcome;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::repository::BlockGenerator;

/// Poller that requests blocks from the simulator forever
pub struct BlockPoller {
    config: Config,
    generator: Arc<dyn BlockGenerator>,
    cycle: AtomicU64,
}

impl BlockPoller {
    /// Creates a new block poller
    pub fn new(config: Config, generator: Arc<dyn BlockGenerator>) -> Self {
        Self {
            config,
            generator,
            cycle: AtomicU64::new(0),
        }
    }

    /// Starts the polling loop
    ///
    /// The next request is only sent once the previous one has been
    /// answered and the poll interval has elapsed after that, so requests
    /// never overlap.
    pub async fn run(&self) {
        info!(
            "Starting block poller (target: {}, interval: {:?})",
            self.config.target_url(),
            self.config.poll_interval
        );

        loop {
            self.poll_once().await;
            time::sleep(self.config.poll_interval).await;
        }
    }

    /// Performs a single poll cycle and logs its outcome
    pub async fn poll_once(&self) -> CycleOutcome {
        let cycle = self.cycle.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(cycle, "Requesting {} block(s)", self.config.blocks_per_cycle);

        let outcome = match self
            .generator
            .generate_blocks(self.config.blocks_per_cycle)
            .await
        {
            Ok(response) => CycleOutcome::from_response(response),
            Err(e) => CycleOutcome::transport_failure(format!("{:#}", e)),
        };

        match &outcome {
            CycleOutcome::Success { .. } => info!(cycle, "{}", outcome),
            CycleOutcome::UnexpectedStatus { .. } => warn!(cycle, "{}", outcome),
            CycleOutcome::TransportFailure { .. } => error!(cycle, "{}", outcome),
        }

        outcome
    }
}
