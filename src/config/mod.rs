//! Configuration module for Xanadu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (XANADU_*)
//! 3. Working directory config (./xanadu.toml)
//! 4. User config (<config dir>/xanadu/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_layered, user_config_path, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{BrowserConfig, ColorMode, Config, DirectoryConfig, OutputConfig};
