//! Core domain types
//!
//! Types describing what happened during a poll cycle. They are produced
//! by the poller and only live until the cycle has been logged.

pub mod outcome;

pub use outcome::CycleOutcome;
