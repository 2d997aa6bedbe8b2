//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod distinguished_name;

pub use config_warning::ConfigWarning;
pub use distinguished_name::DistinguishedName;
