//! Repository layer
//!
//! Repositories abstract communication with the simulator behind a trait
//! so the poll loop can be driven by a scripted implementation in tests.

mod simulator;

pub use simulator::BlockGenerator;
