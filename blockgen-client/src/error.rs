//! Error types for the simulator client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the simulator
///
/// A non-200 status is not an error at this level: the response is
/// returned as-is and classified by the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a full response was read
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }

    /// Check if the connection to the simulator could not be established
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_connect())
    }
}
