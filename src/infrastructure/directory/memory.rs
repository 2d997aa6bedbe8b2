//! In-memory directory
//!
//! Holds containers and records in memory. Used by tests, and as the
//! query engine behind `SnapshotDirectory`. Failures can be injected per
//! container to exercise degraded listings.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::domain::entities::{Container, Record};
use crate::domain::ports::{Directory, DirectoryError, DirectoryResult};
use crate::domain::value_objects::DistinguishedName;

#[derive(Debug, Default)]
struct State {
    containers: Vec<DistinguishedName>,
    /// (parent container, record)
    records: Vec<(DistinguishedName, Record)>,
    failing_containers: HashSet<DistinguishedName>,
    failing_records: HashSet<DistinguishedName>,
}

/// Directory held in memory.
///
/// Mutators take `&self` so a directory can change while a browser holds a
/// shared reference to it, the way a live directory does.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: RefCell<State>,
    fetches: Cell<usize>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container. Registering twice is a no-op.
    pub fn add_container(&self, path: DistinguishedName) {
        let mut state = self.state.borrow_mut();
        if !state.containers.contains(&path) {
            state.containers.push(path);
        }
    }

    /// Insert or replace (by identifier) a record inside `parent`.
    ///
    /// A record without a path gets `CN=<name>,<parent>`.
    pub fn add_record(&self, parent: &DistinguishedName, mut record: Record) {
        if record.path.is_none() {
            record.path = Some(parent.child("CN", &record.name));
        }
        let mut state = self.state.borrow_mut();
        state
            .records
            .retain(|(_, r)| !r.identifier.eq_ignore_ascii_case(&record.identifier));
        state.records.push((parent.clone(), record));
    }

    /// Delete a record, returning it if it existed.
    pub fn remove_record(&self, identifier: &str) -> Option<Record> {
        let mut state = self.state.borrow_mut();
        let index = state
            .records
            .iter()
            .position(|(_, r)| r.identifier.eq_ignore_ascii_case(identifier))?;
        Some(state.records.remove(index).1)
    }

    /// Make child-container listings of `path` fail.
    pub fn fail_containers_at(&self, path: &DistinguishedName) {
        self.state
            .borrow_mut()
            .failing_containers
            .insert(path.clone());
    }

    /// Make record listings of `path` fail.
    pub fn fail_records_at(&self, path: &DistinguishedName) {
        self.state.borrow_mut().failing_records.insert(path.clone());
    }

    /// Number of `fetch_record` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn container_count(&self) -> usize {
        self.state.borrow().containers.len()
    }

    pub fn record_count(&self) -> usize {
        self.state.borrow().records.len()
    }

    fn ensure_container(state: &State, path: &DistinguishedName) -> DirectoryResult<()> {
        if state.containers.contains(path) {
            Ok(())
        } else {
            Err(DirectoryError::ContainerNotFound(path.clone()))
        }
    }
}

impl Directory for InMemoryDirectory {
    fn list_child_containers(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Container>> {
        let state = self.state.borrow();
        if state.failing_containers.contains(path) {
            return Err(DirectoryError::PermissionDenied(path.to_string()));
        }
        Self::ensure_container(&state, path)?;

        Ok(state
            .containers
            .iter()
            .filter(|c| c.parent().as_ref() == Some(path))
            .cloned()
            .map(Container::from_path)
            .collect())
    }

    fn list_records(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Record>> {
        let state = self.state.borrow();
        if state.failing_records.contains(path) {
            return Err(DirectoryError::PermissionDenied(path.to_string()));
        }
        Self::ensure_container(&state, path)?;

        Ok(state
            .records
            .iter()
            .filter(|(parent, _)| parent == path)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn fetch_record(&self, identifier: &str) -> DirectoryResult<Record> {
        self.fetches.set(self.fetches.get() + 1);
        self.state
            .borrow()
            .records
            .iter()
            .find(|(_, r)| r.identifier.eq_ignore_ascii_case(identifier))
            .map(|(_, r)| r.clone())
            .ok_or_else(|| DirectoryError::NotFound(identifier.to_string()))
    }
}
