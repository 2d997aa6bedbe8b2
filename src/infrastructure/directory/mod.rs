//! Directory Implementations
//!
//! Concrete implementations of the Directory port.

mod memory;
mod snapshot;

pub use memory::InMemoryDirectory;
pub use snapshot::{SnapshotDirectory, SnapshotFile, SnapshotUser};
