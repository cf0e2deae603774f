//! Integration test suite for pomdep
//!
//! End-to-end tests that run the `pomdep` binary against pom files in
//! temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **add**: The add command, from success paths to every failure exit
//! - **config**: Config file and environment handling

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod add;
mod config;
