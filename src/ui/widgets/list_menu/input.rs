//! Key mapping for the list menu.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the menu to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Previous,
    Next,
    Confirm,
    Cancel,
    Quit,
}

/// Convert a keyboard event to a MenuAction.
///
/// Release and repeat-release events map to `None`, as does any key the
/// menu does not use. The quit key wins over the vim-style aliases.
pub fn key_to_action(key: KeyEvent, quit_key: char) -> Option<MenuAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(MenuAction::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c == quit_key => Some(MenuAction::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Previous),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Next),
        KeyCode::Enter => Some(MenuAction::Confirm),
        KeyCode::Esc => Some(MenuAction::Cancel),
        _ => None,
    }
}
