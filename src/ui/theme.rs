use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the Xanadu console UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "❯";

    // Directory objects.
    pub const CONTAINER: &str = "📁";
    pub const USER: &str = "👤";
    pub const DISABLED_USER: &str = "⛔";

    // Tree drawing.
    pub const BRANCH: &str = "├─";
    pub const INDENT: &str = "│ ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";

    pub const CONTAINER: &str = "[OU]";
    pub const USER: &str = "-";
    pub const DISABLED_USER: &str = "x";

    pub const BRANCH: &str = "+-";
    pub const INDENT: &str = "| ";
}

// ----------------------------------------------------------------------------
// XanaduTheme - dialoguer theme using the Xanadu pointer icon
// ----------------------------------------------------------------------------

/// Theme for dialoguer text prompts.
///
/// Wraps `ColorfulTheme` and only swaps the prompt prefix for the Xanadu
/// pointer, so `Input` prompts look like the list menu.
pub struct XanaduTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl XanaduTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for XanaduTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{} {}", self.pointer(), prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        match default {
            Some(default) if !prompt.is_empty() => {
                write!(f, "{} {} [{}] : ", self.pointer(), prompt, default)
            }
            _ => write!(f, "{} {} : ", self.pointer(), prompt),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }
}
