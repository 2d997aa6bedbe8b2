use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pointer,
    Container,
    User,
    DisabledUser,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Container) => theme::icons::CONTAINER,
            (true, Icon::User) => theme::icons::USER,
            (true, Icon::DisabledUser) => theme::icons::DISABLED_USER,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Container) => theme::icons_ascii::CONTAINER,
            (false, Icon::User) => theme::icons_ascii::USER,
            (false, Icon::DisabledUser) => theme::icons_ascii::DISABLED_USER,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::DisabledUser => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pointer | Icon::Container => theme::colors::INFO,
            Icon::User => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

/// Tag in front of a container: the folder icon, or `[OU]` / `[CN]` in ASCII.
pub fn container_tag(kind: &str, supports_color: bool, supports_unicode: bool) -> String {
    if supports_unicode || kind == "OU" {
        return Icon::Container.colored(supports_color, supports_unicode);
    }
    let tag = format!("[{}]", kind);
    if supports_color {
        format!("{}", tag.with(theme::colors::INFO))
    } else {
        tag
    }
}
