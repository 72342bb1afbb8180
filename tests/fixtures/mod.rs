//! Test fixtures for trip-planner.
//!
//! Provides in-process provider fakes and canned route data used across
//! the integration tests.

pub mod providers;

pub use providers::*;
