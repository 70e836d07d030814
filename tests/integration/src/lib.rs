//! Integration test utilities for the forum server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over a real TCP socket.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
