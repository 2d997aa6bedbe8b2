use crate::domain::services::TreeLine;
use crate::ui::primitives::icon::{container_tag, Icon};
use crate::ui::primitives::text::Style;
use crate::ui::theme::{icons, icons_ascii};

/// Render a tree walk as indented lines, one per entry.
pub fn render_tree(lines: &[TreeLine], supports_color: bool, supports_unicode: bool) -> String {
    let (branch, indent) = if supports_unicode {
        (icons::BRANCH, icons::INDENT)
    } else {
        (icons_ascii::BRANCH, icons_ascii::INDENT)
    };

    let mut out = String::new();
    for line in lines {
        let depth = line.depth();
        if depth > 0 {
            out.push_str(&indent.repeat(depth - 1));
            out.push_str(branch);
            out.push(' ');
        }

        match line {
            TreeLine::Container { kind, name, .. } => {
                out.push_str(&container_tag(kind, supports_color, supports_unicode));
                out.push(' ');
                out.push_str(&Style::Title.paint(name, supports_color));
            }
            TreeLine::Record {
                label, identifier, ..
            } => {
                out.push_str(&Icon::User.colored(supports_color, supports_unicode));
                out.push(' ');
                out.push_str(label);
                out.push(' ');
                out.push_str(&Style::Dim.paint(&format!("({})", identifier), supports_color));
            }
            TreeLine::Failure { message, .. } => {
                out.push_str(&Icon::Warning.colored(supports_color, supports_unicode));
                out.push(' ');
                out.push_str(&Style::Warning.paint(message, supports_color));
            }
        }
        out.push('\n');
    }
    out
}
