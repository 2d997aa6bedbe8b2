//! Unknown configuration key

use std::path::PathBuf;

/// A key of `xanadu.toml` that no section knows, such as `max_step`
/// under `[browser]`. Loading goes on; the key is ignored and reported
/// on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the ignored key (`snapshots` for `directory.snapshots`)
    pub key: String,
    pub file: PathBuf,
    /// 1-based line of the key, when it can be found in the file
    pub line: Option<usize>,
    /// Closest known key (`max_steps`)
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// `file:line` when the line is known, else the file alone.
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        }
    }
}
