//! Xanadu - Active Directory browser for the Xanadu domain
//!
//! Walks the organizational unit tree one level at a time through a
//! keyboard menu and resolves to a freshly read user account, or to a
//! cancellation. The directory is reached through the `Directory` port;
//! the terminal through the `Menu` and `Console` ports.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Container, Record};
pub use domain::ports::{BrowserNotice, Directory, DirectoryError, Menu, MenuChoice};
pub use domain::services::{BrowserOptions, DirectoryTreeBrowser, SelectionOutcome};
pub use domain::value_objects::DistinguishedName;
pub use error::{XanaduError, XanaduResult};
pub use infrastructure::{InMemoryDirectory, SnapshotDirectory};
pub use ui::widgets::list_menu::ListMenu;
