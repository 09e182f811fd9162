//! Poll cycle outcome

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dto::SimulatorResponse;

/// Status code the simulator answers with when blocks were generated
pub const SUCCESS_STATUS: u16 = 200;

/// Result of a single generate-blocks request
///
/// Exactly one outcome is produced per poll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CycleOutcome {
    /// The simulator answered 200
    Success { body: String },
    /// The simulator answered, but not with 200
    UnexpectedStatus { status: u16, body: String },
    /// The request never produced a response
    TransportFailure { error: String },
}

impl CycleOutcome {
    /// Classifies a simulator response
    ///
    /// Only an exact 200 counts as success. Other 2xx codes are treated
    /// like any other unexpected status.
    pub fn from_response(response: SimulatorResponse) -> Self {
        if response.status == SUCCESS_STATUS {
            Self::Success {
                body: response.body,
            }
        } else {
            Self::UnexpectedStatus {
                status: response.status,
                body: response.body,
            }
        }
    }

    /// Creates a transport failure from any displayable error
    pub fn transport_failure(error: impl fmt::Display) -> Self {
        Self::TransportFailure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { .. } => Some(SUCCESS_STATUS),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::TransportFailure { .. } => None,
        }
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { body } => {
                write!(f, "Successfully sent POST request. Response: {}", body)
            }
            Self::UnexpectedStatus { status, .. } => {
                write!(f, "Failed to send POST request. Status: {}", status)
            }
            Self::TransportFailure { error } => write!(f, "An error occurred: {}", error),
        }
    }
}
