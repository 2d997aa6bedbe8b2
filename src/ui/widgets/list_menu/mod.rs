//! List Menu Widget
//!
//! Single-choice keyboard menu: arrows move a wrapping cursor, Enter
//! confirms, Escape cancels and the quit key returns the "Quitter" choice.
//! The terminal cursor is hidden while the menu waits for keys and is
//! restored however the menu exits.
//!
//! When the console knows its size, every frame fits the terminal: lines
//! are cut to the width and only the options that fit the height are
//! shown, scrolled to keep the cursor visible. A frame that never wraps
//! or scrolls can always be erased by moving up one row per line.
//!
//! # Module Structure
//!
//! - `input` - key to `MenuAction` mapping
//! - `state` - wrapping cursor state machine
//! - `render` - frame rendering

mod input;
mod render;
mod state;

pub use input::{key_to_action, MenuAction};
pub use render::{render_help_bar, render_window, Viewport};
pub use state::ListMenuState;

use std::io;
use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::domain::ports::{BrowserNotice, Menu, MenuChoice};
use crate::ui::console::Console;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Style;

/// Shown instead of a menu when there is nothing to choose
pub const NO_OPTIONS_MESSAGE: &str = "Aucune option disponible";

pub const DEFAULT_QUIT_KEY: char = 'q';

/// Hides the cursor for its lifetime, then puts back the previous
/// visibility. Drop runs on early returns, `?` and unwinding alike.
pub struct CursorGuard<'a, C: Console + ?Sized> {
    console: &'a mut C,
    was_visible: bool,
}

impl<'a, C: Console + ?Sized> CursorGuard<'a, C> {
    pub fn hide(console: &'a mut C) -> io::Result<Self> {
        let was_visible = console.cursor_visible();
        console.set_cursor_visible(false)?;
        Ok(Self {
            console,
            was_visible,
        })
    }
}

impl<C: Console + ?Sized> Deref for CursorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console + ?Sized> DerefMut for CursorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console + ?Sized> Drop for CursorGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.set_cursor_visible(self.was_visible);
        let _ = self.console.flush();
    }
}

pub struct ListMenu<C> {
    console: C,
    quit_key: char,
    unicode: bool,
}

impl<C: Console> ListMenu<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            quit_key: DEFAULT_QUIT_KEY,
            unicode: true,
        }
    }

    pub fn with_quit_key(mut self, quit_key: char) -> Self {
        self.quit_key = quit_key;
        self
    }

    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    pub fn quit_key(&self) -> char {
        self.quit_key
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Show `options` and block until a terminal key.
    ///
    /// Options are displayed in the given order. An empty list prints
    /// `NO_OPTIONS_MESSAGE` and returns `Cancelled` without reading a key.
    /// When the menu ends, its frame is replaced by a one-line summary of
    /// the choice.
    pub fn run(&mut self, title: &str, options: &[String]) -> io::Result<MenuChoice> {
        if options.is_empty() {
            warn!(title, "menu has no options");
            self.console.write_line(NO_OPTIONS_MESSAGE, Style::Warning)?;
            return Ok(MenuChoice::Cancelled);
        }

        let quit_key = self.quit_key;
        let unicode = self.unicode;
        let mut console = CursorGuard::hide(&mut self.console)?;
        let mut state = ListMenuState::new(options.len());

        let mut drawn = draw_frame(&mut *console, title, options, &mut state, quit_key, unicode)?;

        let choice = loop {
            let key = console.read_key()?;
            let Some(action) = key_to_action(key, quit_key) else {
                continue;
            };
            if let Some(choice) = state.apply(action) {
                break choice;
            }
            console.clear_last_lines(drawn)?;
            drawn = draw_frame(&mut *console, title, options, &mut state, quit_key, unicode)?;
        };

        debug!(title, ?choice, "menu closed");
        console.clear_last_lines(drawn)?;
        if let MenuChoice::Selected(index) = choice {
            console.write_line(&format!("{} : {}", title, options[index]), Style::Dim)?;
        }
        Ok(choice)
    }
}

/// Draw the menu sized to the terminal as it is now. Returns the line count.
fn draw_frame<C: Console + ?Sized>(
    console: &mut C,
    title: &str,
    options: &[String],
    state: &mut ListMenuState,
    quit_key: char,
    unicode: bool,
) -> io::Result<usize> {
    let viewport = console.size().map(|(columns, rows)| Viewport::new(columns, rows));
    state.scroll_into_view(viewport.map_or(options.len(), |v| v.option_rows()));
    let frame = render_window(title, options, state, quit_key, unicode, viewport);
    render::draw(console, &frame)
}

impl<C: Console> Menu for ListMenu<C> {
    fn select(&mut self, title: &str, options: &[String]) -> io::Result<MenuChoice> {
        self.run(title, options)
    }

    fn report(&mut self, notice: &BrowserNotice) {
        let (icon, style) = if notice.is_error() {
            (Icon::Error, Style::Error)
        } else {
            (Icon::Warning, Style::Warning)
        };
        let line = format!("{} {}", icon.render(self.unicode), notice);
        if let Err(err) = self.console.write_line(&line, style) {
            warn!(error = %err, "could not display browser notice");
        }
    }
}
