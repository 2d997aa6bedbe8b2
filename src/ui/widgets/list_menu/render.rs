//! Rendering of the list menu to plain lines.

use std::io;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::ListMenuState;
use crate::ui::console::Console;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Style;

/// Terminal area available to a frame.
///
/// A frame must fit in it line for line: the redraw moves back over
/// printed lines, and a line that wraps or scrolls off the top cannot be
/// reached again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: columns as usize,
            rows: rows as usize,
        }
    }

    /// Options shown at once. The title, the help bar and the row the
    /// cursor rests on below the frame take three rows.
    pub fn option_rows(&self) -> usize {
        self.rows.saturating_sub(3).max(1)
    }

    /// Widest line that stays on one row.
    pub fn line_width(&self) -> usize {
        self.columns.saturating_sub(1).max(1)
    }
}

/// One frame of the menu: title, options, help bar.
///
/// With a `viewport`, only the options of the state's window are drawn
/// and every line is cut to the terminal width.
///
/// A scrolled list gets its position in the title, `Compta (12/40)`.
pub fn render_window(
    title: &str,
    options: &[String],
    state: &ListMenuState,
    quit_key: char,
    supports_unicode: bool,
    viewport: Option<Viewport>,
) -> Vec<(String, Style)> {
    let visible = viewport
        .map_or(options.len(), |v| v.option_rows())
        .min(options.len());
    let start = state.offset().min(options.len() - visible);

    let mut lines = Vec::with_capacity(visible + 2);
    if visible < options.len() {
        lines.push((
            format!("{} ({}/{})", title, state.cursor() + 1, options.len()),
            Style::Title,
        ));
    } else {
        lines.push((title.to_string(), Style::Title));
    }

    let pointer = Icon::Pointer.render(supports_unicode);
    for (index, option) in options.iter().enumerate().skip(start).take(visible) {
        if index == state.cursor() {
            lines.push((format!("{} {}", pointer, option), Style::Highlight));
        } else {
            lines.push((format!("  {}", option), Style::Normal));
        }
    }

    lines.push((render_help_bar(quit_key, supports_unicode), Style::Dim));

    if let Some(viewport) = viewport {
        for (text, _) in &mut lines {
            *text = fit_width(text, viewport.line_width(), supports_unicode);
        }
    }
    lines
}

/// Cut `text` to `width` display columns, marking the cut with an ellipsis.
pub fn fit_width(text: &str, width: usize, supports_unicode: bool) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let ellipsis = if supports_unicode { "…" } else { "..." };
    let budget = width.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if ellipsis.width() <= width {
        out.push_str(ellipsis);
    }
    out
}

pub fn render_help_bar(quit_key: char, supports_unicode: bool) -> String {
    if supports_unicode {
        format!(
            "↑/↓ naviguer · Entrée valider · Échap annuler · {} quitter",
            quit_key
        )
    } else {
        format!(
            "Haut/Bas naviguer - Entree valider - Echap annuler - {} quitter",
            quit_key
        )
    }
}

/// Print a frame and return how many lines it used.
pub fn draw<C: Console + ?Sized>(console: &mut C, lines: &[(String, Style)]) -> io::Result<usize> {
    for (text, style) in lines {
        console.write_line(text, *style)?;
    }
    console.flush()?;
    Ok(lines.len())
}
