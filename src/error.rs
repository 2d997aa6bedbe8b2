//! Error types for Xanadu
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::DirectoryError;

/// Result type alias for Xanadu operations
pub type XanaduResult<T> = Result<T, XanaduError>;

/// Main error type for Xanadu operations
#[derive(Error, Debug)]
pub enum XanaduError {
    /// A distinguished name could not be parsed
    #[error("invalid distinguished name '{dn}': {reason}")]
    InvalidDistinguishedName { dn: String, reason: &'static str },

    /// Configuration file is not valid TOML or has wrong types
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Directory service failure
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
