//! One-level listing of a container
//!
//! Shared by the interactive browser and the tree walk: both list a
//! single level, sort it the same way and degrade the same way when a
//! query fails.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::domain::entities::{Container, Record};
use crate::domain::ports::{Directory, DirectoryError};
use crate::domain::value_objects::DistinguishedName;

/// Which of the two per-level queries failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Containers,
    Records,
}

/// A failed query; the corresponding half of the level is empty.
#[derive(Debug)]
pub struct QueryFailure {
    pub kind: QueryKind,
    pub error: DirectoryError,
}

/// Sorted content of one container.
#[derive(Debug, Default)]
pub struct Listing {
    /// Child containers, ascending by name
    pub containers: Vec<Container>,
    /// Records, ascending by label, then identifier
    pub records: Vec<Record>,
    pub failures: Vec<QueryFailure>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty() && self.records.is_empty()
    }
}

/// List and sort the direct content of `path`.
///
/// Query failures are logged and recorded; they never abort the listing.
pub fn list_level<D: Directory + ?Sized>(directory: &D, path: &DistinguishedName) -> Listing {
    let mut listing = Listing::default();

    match directory.list_child_containers(path) {
        Ok(mut containers) => {
            containers.sort_by(|a, b| {
                label_order(&a.name, &b.name)
                    .then_with(|| a.path.to_string().cmp(&b.path.to_string()))
            });
            listing.containers = containers;
        }
        Err(error) => {
            warn!(path = %path, error = %error, "listing child containers failed");
            listing.failures.push(QueryFailure {
                kind: QueryKind::Containers,
                error,
            });
        }
    }

    match directory.list_records(path) {
        Ok(mut records) => {
            records.sort_by(|a, b| {
                label_order(a.label(), b.label()).then_with(|| a.identifier.cmp(&b.identifier))
            });
            listing.records = records;
        }
        Err(error) => {
            warn!(path = %path, error = %error, "listing records failed");
            listing.failures.push(QueryFailure {
                kind: QueryKind::Records,
                error,
            });
        }
    }

    debug!(
        path = %path,
        containers = listing.containers.len(),
        records = listing.records.len(),
        "listed level"
    );
    listing
}

/// Case-insensitive order, ties broken by exact comparison.
fn label_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
