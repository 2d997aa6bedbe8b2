//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the browser with its directory backend and terminal menu
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates services with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
