//! Shared directory fixtures.
//!
//! ```text
//! Xanadu
//! ├─ Compta
//! │  ├─ Paie
//! │  │  └─ Anne ROUX (a.roux)
//! │  └─ Jean DUPONT (jean.dupont)
//! ├─ Direction (empty)
//! └─ Administrateur (admin)
//! ```

use xanadu::domain::entities::Record;
use xanadu::{DistinguishedName, InMemoryDirectory};

pub const ROOT: &str = "OU=Xanadu,DC=xanadu,DC=local";

pub const EXPORT_JSON: &str = r#"{
  "containers": [
    { "distinguishedName": "OU=Xanadu,DC=xanadu,DC=local" },
    { "distinguishedName": "OU=Compta,OU=Xanadu,DC=xanadu,DC=local" },
    { "distinguishedName": "OU=Paie,OU=Compta,OU=Xanadu,DC=xanadu,DC=local" },
    { "distinguishedName": "OU=Direction,OU=Xanadu,DC=xanadu,DC=local" }
  ],
  "users": [
    {
      "samAccountName": "jean.dupont",
      "distinguishedName": "CN=Jean DUPONT,OU=Compta,OU=Xanadu,DC=xanadu,DC=local",
      "displayName": "Jean DUPONT",
      "givenName": "Jean",
      "surname": "DUPONT",
      "email": "jean.dupont@xanadu.local"
    },
    {
      "samAccountName": "a.roux",
      "distinguishedName": "CN=Anne ROUX,OU=Paie,OU=Compta,OU=Xanadu,DC=xanadu,DC=local",
      "displayName": "Anne ROUX"
    },
    {
      "samAccountName": "admin",
      "distinguishedName": "CN=Administrateur,OU=Xanadu,DC=xanadu,DC=local",
      "enabled": false
    }
  ]
}"#;

pub fn dn(s: &str) -> DistinguishedName {
    DistinguishedName::parse(s).unwrap()
}

pub fn root() -> DistinguishedName {
    dn(ROOT)
}

/// The fixture tree, in memory
pub fn sample_directory() -> InMemoryDirectory {
    let root = root();
    let compta = root.child_ou("Compta");
    let paie = compta.child_ou("Paie");

    let directory = InMemoryDirectory::new();
    directory.add_container(root.clone());
    directory.add_container(compta.clone());
    directory.add_container(paie.clone());
    directory.add_container(root.child_ou("Direction"));
    directory.add_record(
        &compta,
        Record::new("jean.dupont", "Jean DUPONT").with_display_name("Jean DUPONT"),
    );
    directory.add_record(&paie, Record::new("a.roux", "Anne ROUX").with_display_name("Anne ROUX"));
    directory.add_record(&root, Record::new("admin", "Administrateur"));
    directory
}
