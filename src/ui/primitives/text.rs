use crossterm::style::Stylize;

use crate::ui::theme;

/// Semantic style of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Normal,
    /// Menu or section title
    Title,
    /// The option under the cursor
    Highlight,
    Dim,
    Success,
    Warning,
    Error,
}

impl Style {
    /// Render `text` in this style; plain text when color is unsupported.
    pub fn paint(self, text: &str, supports_color: bool) -> String {
        if !supports_color {
            return text.to_string();
        }

        match self {
            Style::Normal => text.to_string(),
            Style::Title => format!("{}", text.bold()),
            Style::Highlight => format!("{}", text.with(theme::colors::INFO).bold()),
            Style::Dim => format!("{}", text.with(theme::colors::DIM)),
            Style::Success => format!("{}", text.with(theme::colors::SUCCESS)),
            Style::Warning => format!("{}", text.with(theme::colors::WARNING)),
            Style::Error => format!("{}", text.with(theme::colors::ERROR)),
        }
    }
}
