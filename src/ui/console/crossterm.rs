use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, ClearType},
};

use super::Console;
use crate::ui::primitives::text::Style;

/// Console on the process's stdout.
///
/// Raw mode is only held while waiting for a key, so printed lines keep
/// normal newline handling.
pub struct CrosstermConsole {
    out: Stdout,
    color: bool,
    cursor_visible: bool,
}

impl CrosstermConsole {
    pub fn new(color: bool) -> Self {
        Self {
            out: io::stdout(),
            color,
            cursor_visible: true,
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Console for CrosstermConsole {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.out.flush()?;
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }

    fn write_line(&mut self, text: &str, style: Style) -> io::Result<()> {
        writeln!(self.out, "{}", style.paint(text, self.color))
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, cursor::Show)?;
        } else {
            execute!(self.out, cursor::Hide)?;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear_last_lines(&mut self, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        execute!(
            self.out,
            cursor::MoveToPreviousLine(count),
            terminal::Clear(ClearType::FromCursorDown)
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn size(&self) -> Option<(u16, u16)> {
        terminal::size().ok()
    }
}
