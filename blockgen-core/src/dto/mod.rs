//! Data transfer objects
//!
//! Raw values exchanged between the client and the poller. Nothing here
//! interprets the data; classification lives in [`crate::domain`].

use serde::{Deserialize, Serialize};

/// Response returned by the simulator for a generate-blocks request
///
/// Carries whatever status the simulator answered with, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorResponse {
    pub status: u16,
    pub body: String,
}

impl SimulatorResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
