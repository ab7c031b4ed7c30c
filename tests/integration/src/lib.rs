//! Integration test utilities for the league portal
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a live PostgreSQL instance.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
