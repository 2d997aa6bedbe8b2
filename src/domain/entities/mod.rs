//! Domain Entities
//!
//! Read-only views of directory objects.
//! - `Container` - An organizational unit
//! - `Record` - A user account inside a container

mod container;
mod record;

pub use container::Container;
pub use record::Record;
