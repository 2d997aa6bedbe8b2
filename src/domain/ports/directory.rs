//! Directory port - abstraction over the directory service
//!
//! The domain layer reads organizational units and user accounts through
//! this trait without knowing whether they come from LDAP, an export file
//! or memory.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{Container, Record};
use crate::domain::value_objects::DistinguishedName;

/// Result type for directory queries
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory query errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No record carries this identifier
    #[error("no record with identifier '{0}'")]
    NotFound(String),

    /// The queried container does not exist
    #[error("container not found: {0}")]
    ContainerNotFound(DistinguishedName),

    /// The caller may not read this part of the directory
    #[error("access denied to {0}")]
    PermissionDenied(String),

    /// The directory cannot be reached at all
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// The directory answered with data that cannot be interpreted
    #[error("malformed directory data in {file}: {message}")]
    Malformed { file: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}

/// Read access to a hierarchical directory.
///
/// Every call is a live query: implementations must not serve stale
/// snapshots across calls.
///
/// Implementations:
/// - `SnapshotDirectory` - JSON export re-read on every query
/// - `InMemoryDirectory` - in-memory, for tests and demos
pub trait Directory {
    /// Organizational units directly below `path` (one level).
    fn list_child_containers(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Container>>;

    /// Records directly inside `path` (one level).
    fn list_records(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Record>>;

    /// Authoritative fetch of a single record by identifier.
    fn fetch_record(&self, identifier: &str) -> DirectoryResult<Record>;
}

impl<D: Directory + ?Sized> Directory for &D {
    fn list_child_containers(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Container>> {
        (**self).list_child_containers(path)
    }

    fn list_records(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Record>> {
        (**self).list_records(path)
    }

    fn fetch_record(&self, identifier: &str) -> DirectoryResult<Record> {
        (**self).fetch_record(identifier)
    }
}
