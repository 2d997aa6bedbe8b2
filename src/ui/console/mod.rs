//! Console port
//!
//! The narrow set of terminal operations the interactive widgets need:
//! read one key, print a styled line, erase the previous draw and toggle
//! cursor visibility. `CrosstermConsole` talks to the real terminal;
//! `ScriptedConsole` replays queued keys and records what was printed.

mod crossterm;
mod scripted;

pub use self::crossterm::CrosstermConsole;
pub use self::scripted::ScriptedConsole;

use std::io;

use ::crossterm::event::KeyEvent;

use crate::ui::primitives::text::Style;

pub trait Console {
    /// Block until the next key event.
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Print one line of text in the given style.
    fn write_line(&mut self, text: &str, style: Style) -> io::Result<()>;

    fn cursor_visible(&self) -> bool;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Erase the last `count` printed lines and move back to the first one.
    ///
    /// Only reliable when each of those lines took one terminal row and
    /// none has scrolled off the top; callers size their output with
    /// `size`.
    fn clear_last_lines(&mut self, count: usize) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Terminal size as `(columns, rows)`, when known.
    fn size(&self) -> Option<(u16, u16)> {
        None
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        (**self).read_key()
    }

    fn write_line(&mut self, text: &str, style: Style) -> io::Result<()> {
        (**self).write_line(text, style)
    }

    fn cursor_visible(&self) -> bool {
        (**self).cursor_visible()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn clear_last_lines(&mut self, count: usize) -> io::Result<()> {
        (**self).clear_last_lines(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn size(&self) -> Option<(u16, u16)> {
        (**self).size()
    }
}
