//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and UI layers provide concrete implementations.

pub mod directory;
pub mod menu;

pub use directory::{Directory, DirectoryError, DirectoryResult};
pub use menu::{BrowserNotice, Menu, MenuChoice};
