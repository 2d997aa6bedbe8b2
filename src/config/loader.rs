//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::DistinguishedName;
use crate::error::{XanaduError, XanaduResult};

use super::types::{ColorMode, Config};

pub use crate::domain::value_objects::ConfigWarning;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "xanadu.toml";

/// Resolved configuration and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> XanaduResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| XanaduError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file to use.
///
/// An `explicit` path must load. Otherwise `<project_dir>/xanadu.toml` is
/// tried, then `user_config`; a file that fails to load is skipped with a
/// warning. Environment overrides are not applied here.
pub fn load_layered(
    explicit: Option<&Path>,
    project_dir: &Path,
    user_config: Option<&Path>,
) -> XanaduResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        });
    }

    let candidates = [
        Some(project_dir.join(PROJECT_CONFIG_FILE)),
        user_config.map(Path::to_path_buf),
    ];
    for path in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                debug!(file = %path.display(), "loaded configuration");
                return Ok(LoadedConfig {
                    config,
                    source: Some(path),
                    warnings,
                });
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping unreadable config file");
            }
        }
    }

    Ok(LoadedConfig::default())
}

/// `<config dir>/xanadu/config.toml` for the current user
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xanadu").join("config.toml"))
}

/// Apply environment variable overrides (XANADU_* prefix).
///
/// Invalid values are logged and ignored.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // XANADU_ROOT
    if let Some(root) = get_env("XANADU_ROOT") {
        match DistinguishedName::parse(&root) {
            Ok(root) => config.directory.root = root,
            Err(err) => warn!(error = %err, "ignoring XANADU_ROOT"),
        }
    }

    // XANADU_SNAPSHOT
    if let Some(snapshot) = get_env("XANADU_SNAPSHOT").filter(|s| !s.trim().is_empty()) {
        config.directory.snapshot = PathBuf::from(snapshot);
    }

    // XANADU_COLOR
    if let Some(color) = get_env("XANADU_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => warn!(value = %color, "ignoring XANADU_COLOR, expected auto, always or never"),
        }
    }

    config
}

fn validate(config: &Config, path: &Path) -> XanaduResult<()> {
    let invalid = |message: &str| XanaduError::InvalidConfig {
        file: path.to_path_buf(),
        message: message.to_string(),
    };

    if config.browser.max_steps == 0 {
        return Err(invalid("browser.max_steps must be at least 1"));
    }
    if config.browser.quit_key.is_control() || config.browser.quit_key.is_whitespace() {
        return Err(invalid("browser.quit_key must be a printable character"));
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "directory",
        "root",
        "snapshot",
        "browser",
        "max_steps",
        "quit_key",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
