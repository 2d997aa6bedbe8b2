//! Terminal user interface
//!
//! - `console` - terminal port and its implementations
//! - `widgets` - the list menu and field rendering
//! - `views` - whole-screen renderings (tree, record details)
//! - `context` / `terminal` - color and unicode decisions

pub mod console;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
