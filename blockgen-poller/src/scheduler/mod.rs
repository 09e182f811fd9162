//! Scheduler layer for the poller
//!
//! Drives the simulator on a fixed cadence, one request at a time.

pub mod poller;

pub use poller::BlockPoller;
