use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::Style;

/// Label/value rows with labels padded to a common display width.
#[derive(Debug, Default, Clone)]
pub struct FieldList {
    rows: Vec<(String, String)>,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Like `add`, with "-" for a missing or blank value.
    pub fn add_optional(&mut self, label: impl Into<String>, value: Option<&str>) {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("-");
        self.add(label, value);
    }

    pub fn render(&self, indent: usize, supports_color: bool) -> Vec<String> {
        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        self.rows
            .iter()
            .map(|(label, value)| {
                let padding = label_width - label.width();
                let label = format!("{}{}", label, " ".repeat(padding));
                format!(
                    "{}{} : {}",
                    " ".repeat(indent),
                    Style::Dim.paint(&label, supports_color),
                    value
                )
            })
            .collect()
    }
}
