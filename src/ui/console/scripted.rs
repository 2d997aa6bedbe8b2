use std::collections::VecDeque;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use super::Console;
use crate::ui::primitives::text::Style;

/// Console that replays a fixed key sequence.
///
/// Everything printed is kept twice: `transcript` is the full history,
/// `screen` is what would still be visible after in-place redraws.
/// Reading past the last scripted key fails with `UnexpectedEof`.
///
/// With a size (`with_size`), `screen` holds terminal rows instead of
/// lines: long lines wrap onto several rows, rows that scroll above the
/// window can no longer be cleared, and `clear_last_lines` moves up by
/// rows the way a real terminal does.
#[derive(Debug, Clone)]
pub struct ScriptedConsole {
    keys: VecDeque<KeyEvent>,
    transcript: Vec<(String, Style)>,
    screen: Vec<String>,
    cursor_visible: bool,
    keys_read: usize,
    hide_count: usize,
    size: Option<(u16, u16)>,
    /// Rows scrolled out of reach
    scrolled_off: usize,
}

impl Default for ScriptedConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self {
            keys: VecDeque::new(),
            transcript: Vec::new(),
            screen: Vec::new(),
            cursor_visible: true,
            keys_read: 0,
            hide_count: 0,
            size: None,
            scrolled_off: 0,
        }
    }

    /// Emulate a terminal of `columns` x `rows`.
    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.size = Some((columns.max(1), rows.max(2)));
        self
    }

    pub fn with_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        let mut console = Self::new();
        for code in keys {
            console.push_key(code);
        }
        console
    }

    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn push_event(&mut self, event: KeyEvent) {
        self.keys.push_back(event);
    }

    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    /// How many times the cursor was hidden
    pub fn hide_count(&self) -> usize {
        self.hide_count
    }

    pub fn transcript(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().map(|(line, _)| line.as_str())
    }

    pub fn lines_with_style(&self, style: Style) -> impl Iterator<Item = &str> {
        self.transcript
            .iter()
            .filter(move |(_, s)| *s == style)
            .map(|(line, _)| line.as_str())
    }

    pub fn screen(&self) -> &[String] {
        &self.screen
    }
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        let key = self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted key left")
        })?;
        self.keys_read += 1;
        Ok(key)
    }

    fn write_line(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.transcript.push((text.to_string(), style));
        let Some((columns, rows)) = self.size else {
            self.screen.push(text.to_string());
            return Ok(());
        };

        self.screen.extend(wrap_rows(text, columns as usize));
        // The row under the last line holds the cursor.
        let reachable = rows as usize - 1;
        let on_window = self.screen.len() - self.scrolled_off;
        if on_window > reachable {
            self.scrolled_off += on_window - reachable;
        }
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if !visible {
            self.hide_count += 1;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear_last_lines(&mut self, count: usize) -> io::Result<()> {
        let keep = self
            .screen
            .len()
            .saturating_sub(count)
            .max(self.scrolled_off);
        self.screen.truncate(keep);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn size(&self) -> Option<(u16, u16)> {
        self.size
    }
}

/// Terminal rows taken by `text` at `columns` columns.
fn wrap_rows(text: &str, columns: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(c);
        used += w;
    }
    rows.push(row);
    rows
}
