use crate::config::ConfigWarning;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Style;

/// One line per unknown configuration key.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for warning in warnings {
        let mut text = format!(
            "clé de configuration inconnue « {} » ({})",
            warning.key,
            warning.location()
        );
        if let Some(suggestion) = &warning.suggestion {
            text.push_str(&format!(", vouliez-vous dire « {} » ?", suggestion));
        }
        out.push_str(&format!("{} {}\n", icon, Style::Warning.paint(&text, supports_color)));
    }
    out
}
