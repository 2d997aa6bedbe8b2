use crate::domain::entities::Record;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Style;
use crate::ui::widgets::fields::FieldList;

/// Details of one user account.
pub fn render_record(record: &Record, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if record.enabled {
        Icon::User
    } else {
        Icon::DisabledUser
    };

    let mut fields = FieldList::new();
    fields.add("Identifiant", record.identifier.as_str());
    fields.add_optional("Prénom", record.given_name.as_deref());
    fields.add_optional("Nom", record.surname.as_deref());
    fields.add_optional("E-mail", record.email.as_deref());
    fields.add(
        "Compte",
        if record.enabled {
            Style::Success.paint("actif", supports_color)
        } else {
            Style::Error.paint("désactivé", supports_color)
        },
    );
    fields.add_optional(
        "Emplacement",
        record.path.as_ref().map(ToString::to_string).as_deref(),
    );
    fields.add_optional(
        "Créé le",
        record
            .when_created
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .as_deref(),
    );

    let mut out = format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        Style::Title.paint(record.label(), supports_color)
    );
    for line in fields.render(2, supports_color) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
