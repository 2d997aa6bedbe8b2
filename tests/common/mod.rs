//! Common test utilities for Xanadu integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - Fixtures: a small Xanadu directory, as JSON export and in memory

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
