//! Record entity - a user account

use chrono::{DateTime, Utc};

use crate::domain::value_objects::DistinguishedName;

/// A leaf entry of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Stable key used to re-fetch the record (sAMAccountName)
    pub identifier: String,
    /// Raw name (CN), used when no display name is set
    pub name: String,
    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub enabled: bool,
    /// Path of the record itself
    pub path: Option<DistinguishedName>,
    pub when_created: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            display_name: None,
            given_name: None,
            surname: None,
            email: None,
            enabled: true,
            path: None,
            when_created: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_path(mut self, path: DistinguishedName) -> Self {
        self.path = Some(path);
        self
    }

    /// Best available label: display name, else raw name.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}
