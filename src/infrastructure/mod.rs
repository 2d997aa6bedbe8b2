//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `directory/` - Directory implementations (Snapshot, InMemory)

pub mod directory;

// Re-export for convenience
pub use directory::{InMemoryDirectory, SnapshotDirectory};
