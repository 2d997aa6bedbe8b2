//! Service Factory
//!
//! Wires configuration, the directory backend and the terminal together.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::config::{self, Config, LoadedConfig};
use crate::domain::services::DirectoryTreeBrowser;
use crate::domain::value_objects::DistinguishedName;
use crate::error::XanaduResult;
use crate::infrastructure::SnapshotDirectory;
use crate::ui::console::CrosstermConsole;
use crate::ui::widgets::list_menu::ListMenu;

/// Browser over the configured directory export
pub type ConcreteBrowser = DirectoryTreeBrowser<SnapshotDirectory>;

/// Resolve configuration: file layers, then `XANADU_*`, then CLI flags.
pub fn load_config(
    explicit: Option<&Path>,
    project_dir: &Path,
    snapshot_override: Option<PathBuf>,
) -> XanaduResult<LoadedConfig> {
    let user_config = config::user_config_path();
    let mut loaded = config::load_layered(explicit, project_dir, user_config.as_deref())?;
    loaded.config = loaded.config.with_env_overrides();
    if let Some(snapshot) = snapshot_override {
        loaded.config.directory.snapshot = snapshot;
    }
    Ok(loaded)
}

pub fn create_directory(config: &Config) -> SnapshotDirectory {
    SnapshotDirectory::new(&config.directory.snapshot)
}

/// Create a browser rooted at the configured root, or at `root` when given
pub fn create_browser(config: &Config, root: Option<DistinguishedName>) -> ConcreteBrowser {
    let mut options = config.browser_options();
    if let Some(root) = root {
        options = options.with_root(root);
    }
    DirectoryTreeBrowser::new(create_directory(config), options)
}

/// Create the terminal menu
pub fn create_list_menu(config: &Config, color: bool, unicode: bool) -> ListMenu<CrosstermConsole> {
    ListMenu::new(CrosstermConsole::new(color))
        .with_quit_key(config.browser.quit_key)
        .with_unicode(unicode)
}
