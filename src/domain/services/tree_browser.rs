//! Directory tree browser
//!
//! Lets the user walk down the OU hierarchy one level at a time and pick a
//! user account, with back-navigation to the parent. The current position
//! is a single `DistinguishedName`; every step re-queries the directory.
//!
//! Display and input are delegated to a `Menu`. The browser maps the
//! returned index back to a structured `MenuEntry`, so labels are never
//! parsed.

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{Container, Record};
use crate::domain::ports::{BrowserNotice, Directory, DirectoryError, Menu, MenuChoice};
use crate::domain::services::listing::{list_level, Listing};
use crate::domain::value_objects::DistinguishedName;

/// Root used when none is configured
pub const DEFAULT_ROOT: &str = "OU=Xanadu,DC=xanadu,DC=local";

/// Upper bound on navigation steps in one session
pub const DEFAULT_MAX_STEPS: usize = 10_000;

pub fn default_root() -> DistinguishedName {
    DistinguishedName::parse(DEFAULT_ROOT).expect("DEFAULT_ROOT is a valid DN")
}

/// Browser settings, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Top of the navigable tree; going up from here cancels
    pub root: DistinguishedName,
    /// Steps (menu rounds) before the session is abandoned
    pub max_steps: usize,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl BrowserOptions {
    pub fn with_root(mut self, root: DistinguishedName) -> Self {
        self.root = root;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

/// One selectable line of a browser step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Go to the parent container
    Up,
    /// Descend into a child container
    Container(Container),
    /// Pick a user account
    Record { label: String, identifier: String },
}

impl MenuEntry {
    fn from_record(record: &Record) -> Self {
        MenuEntry::Record {
            label: record.label().to_string(),
            identifier: record.identifier.clone(),
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuEntry::Up => f.write_str(".. (remonter)"),
            MenuEntry::Container(container) => {
                write!(f, "[{}] {}", container.kind(), container.name)
            }
            MenuEntry::Record { label, identifier } => {
                write!(f, "[Utilisateur] {} ({})", label, identifier)
            }
        }
    }
}

/// Terminal result of a browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A record was chosen and freshly re-read from the directory
    RecordChosen(Record),
    Cancelled,
}

impl SelectionOutcome {
    pub fn record(self) -> Option<Record> {
        match self {
            SelectionOutcome::RecordChosen(record) => Some(record),
            SelectionOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SelectionOutcome::Cancelled)
    }
}

/// Entries of one step: `Up` (when requested), containers, then records.
///
/// `listing` must already be sorted, as `list_level` returns it.
pub fn build_entries(listing: &Listing, include_up: bool) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(listing.containers.len() + listing.records.len() + 1);
    if include_up {
        entries.push(MenuEntry::Up);
    }
    entries.extend(listing.containers.iter().cloned().map(MenuEntry::Container));
    entries.extend(listing.records.iter().map(MenuEntry::from_record));
    entries
}

/// Stateful navigator over a `Directory`.
pub struct DirectoryTreeBrowser<D> {
    directory: D,
    options: BrowserOptions,
}

impl<D: Directory> DirectoryTreeBrowser<D> {
    pub fn new(directory: D, options: BrowserOptions) -> Self {
        Self { directory, options }
    }

    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }

    /// Browse from the configured root.
    pub fn browse<M: Menu + ?Sized>(&self, menu: &mut M) -> SelectionOutcome {
        self.browse_from(self.options.root.clone(), menu)
    }

    /// Browse starting at `start`. `Up` is offered at every level except
    /// the configured root. A `start` outside the root is replaced by the
    /// root.
    pub fn browse_from<M: Menu + ?Sized>(
        &self,
        start: DistinguishedName,
        menu: &mut M,
    ) -> SelectionOutcome {
        let mut current = if start.is_within(&self.options.root) {
            start
        } else {
            warn!(start = %start, root = %self.options.root, "start is outside the root, using the root");
            self.options.root.clone()
        };

        for step in 0..self.options.max_steps {
            let at_root = current == self.options.root;
            debug!(step, path = %current, at_root, "browser step");

            let listing = list_level(&self.directory, &current);
            for failure in &listing.failures {
                menu.report(&BrowserNotice::QueryFailed {
                    path: current.clone(),
                    message: failure.error.to_string(),
                });
            }

            let entries = build_entries(&listing, !at_root);
            if entries.is_empty() {
                menu.report(&BrowserNotice::NothingHere {
                    container: current.leaf_name(),
                });
                return SelectionOutcome::Cancelled;
            }
            if entries == [MenuEntry::Up] {
                menu.report(&BrowserNotice::NothingHere {
                    container: current.leaf_name(),
                });
            }

            let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();
            let choice = match menu.select(&current.leaf_name(), &labels) {
                Ok(choice) => choice,
                Err(err) => {
                    error!(error = %err, "menu failed, cancelling selection");
                    return SelectionOutcome::Cancelled;
                }
            };

            let index = match choice {
                MenuChoice::Selected(index) => index,
                MenuChoice::Cancelled | MenuChoice::Quit => {
                    info!(?choice, path = %current, "selection cancelled by user");
                    return SelectionOutcome::Cancelled;
                }
            };

            match entries.get(index) {
                None => {
                    warn!(index, len = entries.len(), "menu returned an index out of range");
                    return SelectionOutcome::Cancelled;
                }
                Some(MenuEntry::Up) => {
                    if at_root {
                        return SelectionOutcome::Cancelled;
                    }
                    match current.parent() {
                        Some(parent) => current = parent,
                        None => return SelectionOutcome::Cancelled,
                    }
                }
                Some(MenuEntry::Container(container)) => {
                    current = container.path.clone();
                }
                Some(MenuEntry::Record { identifier, .. }) => {
                    return self.resolve_record(identifier, menu);
                }
            }
        }

        warn!(limit = self.options.max_steps, "browser step limit reached");
        menu.report(&BrowserNotice::StepLimitReached {
            limit: self.options.max_steps,
        });
        SelectionOutcome::Cancelled
    }

    fn resolve_record<M: Menu + ?Sized>(&self, identifier: &str, menu: &mut M) -> SelectionOutcome {
        match self.directory.fetch_record(identifier) {
            Ok(record) => {
                info!(identifier, "record selected");
                SelectionOutcome::RecordChosen(record)
            }
            Err(DirectoryError::NotFound(_)) => {
                warn!(identifier, "selected record vanished before re-fetch");
                menu.report(&BrowserNotice::RecordNotFound {
                    identifier: identifier.to_string(),
                });
                SelectionOutcome::Cancelled
            }
            Err(err) => {
                warn!(identifier, error = %err, "re-fetching selected record failed");
                menu.report(&BrowserNotice::RecordUnavailable {
                    identifier: identifier.to_string(),
                    message: err.to_string(),
                });
                SelectionOutcome::Cancelled
            }
        }
    }
}
