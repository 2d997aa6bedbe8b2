//! Container entity - an organizational unit or builtin container

use crate::domain::value_objects::DistinguishedName;

/// A node of the directory hierarchy.
///
/// The hierarchy itself is owned by the directory service; a `Container`
/// only records where the node sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Name, unique among siblings
    pub name: String,
    /// Fully-qualified path of the container itself
    pub path: DistinguishedName,
}

impl Container {
    /// Build a container from its own path; the name is the leading RDN value.
    pub fn from_path(path: DistinguishedName) -> Self {
        Self {
            name: path.leaf_name(),
            path,
        }
    }

    /// RDN attribute type of the container (`OU` for organizational
    /// units, `CN` for builtin containers such as `CN=Users`).
    pub fn kind(&self) -> String {
        self.path.leaf_attribute()
    }
}
