//! Cursor state of the list menu.

use super::input::MenuAction;
use crate::domain::ports::MenuChoice;

/// Highlighted position over `len` options, wrapping at both ends.
///
/// `offset` is the first option shown when the terminal is too short for
/// the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMenuState {
    len: usize,
    cursor: usize,
    offset: usize,
}

impl ListMenuState {
    /// State over `len` options with the cursor on the first one.
    ///
    /// `len` must be non-zero; the menu never builds a state for an empty
    /// option list.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "ListMenuState needs at least one option");
        Self {
            len,
            cursor: 0,
            offset: 0,
        }
    }

    /// Start on `cursor`, clamped to the last option.
    pub fn with_cursor(len: usize, cursor: usize) -> Self {
        let mut state = Self::new(len);
        state.cursor = cursor.min(len.saturating_sub(1));
        state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the window of `visible` options so that it holds the cursor,
    /// scrolling as little as possible.
    pub fn scroll_into_view(&mut self, visible: usize) {
        let visible = visible.clamp(1, self.len.max(1));
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }
        self.offset = self.offset.min(self.len.saturating_sub(visible));
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Apply one action. Returns the terminal choice, or `None` when the
    /// menu keeps running.
    pub fn apply(&mut self, action: MenuAction) -> Option<MenuChoice> {
        match action {
            MenuAction::Previous => {
                self.cursor = if self.cursor == 0 {
                    self.len - 1
                } else {
                    self.cursor - 1
                };
                None
            }
            MenuAction::Next => {
                self.cursor = (self.cursor + 1) % self.len;
                None
            }
            MenuAction::Confirm => Some(MenuChoice::Selected(self.cursor)),
            MenuAction::Cancel => Some(MenuChoice::Cancelled),
            MenuAction::Quit => Some(MenuChoice::Quit),
        }
    }
}
