//! Domain Layer
//!
//! The directory browsing logic, free of terminal and storage details.
//!
//! ## Structure
//!
//! - `entities/` - Containers (OUs) and records (user accounts)
//! - `value_objects/` - Immutable value types (DistinguishedName, ConfigWarning)
//! - `services/` - Tree browser and tree walk
//! - `ports/` - Interfaces implemented by infrastructure and UI
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer reaches the directory and the user only through ports
//! 2. **Live queries** - Nothing read from the directory is cached between steps
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
