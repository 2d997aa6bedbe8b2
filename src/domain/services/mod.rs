//! Domain Services
//!
//! Navigation logic over the `Directory` port. Services hold no state
//! between calls beyond what the caller passes in.

mod listing;
mod tree_browser;
mod tree_walk;

pub use listing::{list_level, Listing, QueryFailure, QueryKind};
pub use tree_browser::{
    build_entries, default_root, BrowserOptions, DirectoryTreeBrowser, MenuEntry,
    SelectionOutcome, DEFAULT_MAX_STEPS, DEFAULT_ROOT,
};
pub use tree_walk::{walk_tree, TreeLine};
