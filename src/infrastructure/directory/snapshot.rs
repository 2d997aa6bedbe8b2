//! Snapshot directory
//!
//! Reads a JSON export of the directory (OUs and user accounts, as
//! produced by a scheduled `Get-ADOrganizationalUnit` / `Get-ADUser`
//! export). The file is re-read on every query so that a refreshed export
//! is picked up mid-session.
//!
//! ```json
//! {
//!   "containers": [{ "distinguishedName": "OU=Xanadu,DC=xanadu,DC=local" }],
//!   "users": [{
//!     "samAccountName": "jean.dupont",
//!     "distinguishedName": "CN=Jean DUPONT,OU=Xanadu,DC=xanadu,DC=local",
//!     "displayName": "Jean DUPONT"
//!   }]
//! }
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{Container, Record};
use crate::domain::ports::{Directory, DirectoryError, DirectoryResult};
use crate::domain::value_objects::DistinguishedName;

use super::memory::InMemoryDirectory;

/// On-disk export format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    #[serde(default)]
    pub containers: Vec<SnapshotContainer>,
    #[serde(default)]
    pub users: Vec<SnapshotUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotContainer {
    pub distinguished_name: DistinguishedName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUser {
    pub sam_account_name: String,
    pub distinguished_name: DistinguishedName,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub when_created: Option<DateTime<Utc>>,
}

fn default_enabled() -> bool {
    true
}

impl SnapshotUser {
    fn into_record(self) -> Record {
        let name = self
            .name
            .unwrap_or_else(|| self.distinguished_name.leaf_name());
        Record {
            identifier: self.sam_account_name,
            name,
            display_name: self.display_name,
            given_name: self.given_name,
            surname: self.surname,
            email: self.email,
            enabled: self.enabled,
            path: Some(self.distinguished_name),
            when_created: self.when_created,
        }
    }
}

/// Directory backed by a JSON export file.
#[derive(Debug, Clone)]
pub struct SnapshotDirectory {
    path: PathBuf,
}

impl SnapshotDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and index the export as it is right now.
    pub fn load(&self) -> DirectoryResult<InMemoryDirectory> {
        let content = self.read_locked()?;
        let snapshot: SnapshotFile =
            serde_json::from_str(&content).map_err(|e| DirectoryError::Malformed {
                file: self.path.clone(),
                message: e.to_string(),
            })?;

        let directory = InMemoryDirectory::new();
        for container in snapshot.containers {
            directory.add_container(container.distinguished_name);
        }
        for user in snapshot.users {
            let Some(parent) = user.distinguished_name.parent() else {
                return Err(DirectoryError::Malformed {
                    file: self.path.clone(),
                    message: format!(
                        "user '{}' has no parent container",
                        user.sam_account_name
                    ),
                });
            };
            directory.add_record(&parent, user.into_record());
        }

        debug!(
            file = %self.path.display(),
            containers = directory.container_count(),
            records = directory.record_count(),
            "loaded directory snapshot"
        );
        Ok(directory)
    }

    fn read_locked(&self) -> DirectoryResult<String> {
        let mut file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DirectoryError::Unavailable(format!(
                "directory export not found: {}",
                self.path.display()
            )),
            std::io::ErrorKind::PermissionDenied => {
                DirectoryError::PermissionDenied(self.path.display().to_string())
            }
            _ => DirectoryError::Io(e),
        })?;

        // The exporter rewrites the file under an exclusive lock.
        FileExt::lock_shared(&file)?;
        let mut content = String::new();
        let result = file.read_to_string(&mut content);
        let _ = FileExt::unlock(&file);
        result?;

        Ok(content)
    }
}

impl Directory for SnapshotDirectory {
    fn list_child_containers(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Container>> {
        self.load()?.list_child_containers(path)
    }

    fn list_records(&self, path: &DistinguishedName) -> DirectoryResult<Vec<Record>> {
        self.load()?.list_records(path)
    }

    fn fetch_record(&self, identifier: &str) -> DirectoryResult<Record> {
        self.load()?.fetch_record(identifier)
    }
}
