//! Scenario: an administrator looks up an account by walking the OU tree.

use crossterm::event::KeyCode;

use xanadu::ui::console::ScriptedConsole;
use xanadu::{BrowserOptions, DirectoryTreeBrowser, ListMenu, SelectionOutcome};

use crate::common::{root, sample_directory};

fn list_menu(keys: impl IntoIterator<Item = KeyCode>) -> ListMenu<ScriptedConsole> {
    ListMenu::new(ScriptedConsole::with_keys(keys)).with_unicode(false)
}

#[test]
fn root_then_compta_then_jean_dupont() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // Root: [OU] Compta, [OU] Direction, [Utilisateur] Administrateur (admin)
    // Compta: .. (remonter), [OU] Paie, [Utilisateur] Jean DUPONT (jean.dupont)
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);

    let outcome = browser.browse(&mut menu);

    let record = outcome.record().expect("a record should be chosen");
    assert_eq!(record.identifier, "jean.dupont");
    assert_eq!(record.label(), "Jean DUPONT");
    assert_eq!(directory.fetch_count(), 1);

    let console = menu.console();
    let titles: Vec<&str> = console
        .lines_with_style(xanadu::ui::primitives::text::Style::Title)
        .collect();
    assert_eq!(titles.first(), Some(&"Xanadu"));
    assert!(titles.contains(&"Compta"));
    assert_eq!(
        console.screen(),
        [
            "Xanadu : [OU] Compta",
            "Compta : [Utilisateur] Jean DUPONT (jean.dupont)",
        ]
    );
}

#[test]
fn up_arrow_at_top_wraps_to_last_entry() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    let mut menu = list_menu([KeyCode::Up, KeyCode::Enter]);

    let outcome = browser.browse(&mut menu);

    assert_eq!(outcome.record().map(|r| r.identifier), Some("admin".to_string()));
}

#[test]
fn deep_record_two_levels_down() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // Root -> Compta -> Paie -> Anne ROUX
    let mut menu = list_menu([
        KeyCode::Enter,
        KeyCode::Down,
        KeyCode::Enter,
        KeyCode::Down,
        KeyCode::Enter,
    ]);

    let outcome = browser.browse(&mut menu);

    assert_eq!(
        outcome.record().map(|r| r.identifier),
        Some("a.roux".to_string())
    );
    assert_eq!(menu.console().remaining_keys(), 0);
}

#[test]
fn escape_anywhere_cancels() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Esc]);

    assert_eq!(browser.browse(&mut menu), SelectionOutcome::Cancelled);
    assert_eq!(directory.fetch_count(), 0);
}

#[test]
fn quit_key_cancels_and_restores_cursor() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Char('q')]);

    assert!(browser.browse(&mut menu).is_cancelled());
    assert!(xanadu::ui::console::Console::cursor_visible(menu.console()));
    assert_eq!(menu.console().hide_count(), 2);
}

#[test]
fn account_in_builtin_users_container_can_be_picked() {
    let dir = tempfile::TempDir::new().unwrap();
    let export = dir.path().join("xanadu-directory.json");
    std::fs::write(
        &export,
        r#"{
  "containers": [
    { "distinguishedName": "DC=xanadu,DC=local" },
    { "distinguishedName": "CN=Users,DC=xanadu,DC=local" }
  ],
  "users": [
    {
      "samAccountName": "jean.dupont",
      "distinguishedName": "CN=Jean DUPONT,CN=Users,DC=xanadu,DC=local"
    }
  ]
}"#,
    )
    .unwrap();
    let browser = DirectoryTreeBrowser::new(
        xanadu::SnapshotDirectory::new(&export),
        BrowserOptions::default().with_root(crate::common::dn("DC=xanadu,DC=local")),
    );
    // Domain -> Users -> Jean DUPONT
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);

    let outcome = browser.browse(&mut menu);

    assert_eq!(
        outcome.record().map(|r| r.identifier),
        Some("jean.dupont".to_string())
    );
    assert_eq!(menu.console().screen()[0], "xanadu : [CN] Users");
    assert_eq!(
        menu.console()
            .lines_with_style(xanadu::ui::primitives::text::Style::Error)
            .count(),
        0
    );
}
