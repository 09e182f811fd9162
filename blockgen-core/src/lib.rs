//! Blockgen Core
//!
//! Core types shared by the block generation client and poller.
//!
//! This crate contains:
//! - Domain types: the outcome of a single poll cycle
//! - DTOs: the raw simulator response as seen over HTTP
//! - Endpoint helpers: defaults and URL construction for the simulator API

pub mod domain;
pub mod dto;
pub mod endpoint;
