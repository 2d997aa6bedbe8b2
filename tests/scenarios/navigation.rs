//! Scenario: moving up and down the tree, empty levels, failures.

use crossterm::event::KeyCode;

use xanadu::ui::console::ScriptedConsole;
use xanadu::ui::primitives::text::Style;
use xanadu::{BrowserOptions, DirectoryTreeBrowser, InMemoryDirectory, ListMenu, SelectionOutcome};

use crate::common::{root, sample_directory};

fn list_menu(keys: impl IntoIterator<Item = KeyCode>) -> ListMenu<ScriptedConsole> {
    ListMenu::new(ScriptedConsole::with_keys(keys)).with_unicode(false)
}

/// Option lines of every frame whose title is `title`
fn frames_titled<'a>(console: &'a ScriptedConsole, title: &str) -> Vec<Vec<&'a str>> {
    let lines: Vec<&str> = console.transcript().collect();
    let mut frames = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i] == title {
            let options: Vec<&str> = lines[i + 1..]
                .iter()
                .take_while(|l| l.starts_with("  ") || l.starts_with("> "))
                .map(|l| &l[2..])
                .collect();
            frames.push(options);
        }
        i += 1;
    }
    frames
}

#[test]
fn empty_ou_offers_only_up_and_goes_back() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // Root -> Direction (empty) -> Up -> Esc
    let mut menu = list_menu([KeyCode::Down, KeyCode::Enter, KeyCode::Enter, KeyCode::Esc]);

    let outcome = browser.browse(&mut menu);

    assert_eq!(outcome, SelectionOutcome::Cancelled);
    let console = menu.console();
    let warnings: Vec<&str> = console.lines_with_style(Style::Warning).collect();
    assert_eq!(
        warnings,
        vec!["[WARN] Rien ici : aucune OU ni aucun utilisateur dans « Direction »"]
    );
    assert_eq!(frames_titled(console, "Direction"), vec![vec![".. (remonter)"]]);
}

#[test]
fn going_up_then_down_shows_same_entries() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // Root -> Compta -> Up -> Compta -> Esc
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Enter, KeyCode::Enter, KeyCode::Esc]);

    browser.browse(&mut menu);

    let compta = frames_titled(menu.console(), "Compta");
    let first_visit = compta.first().unwrap();
    let second_visit = compta.last().unwrap();
    assert_eq!(
        *first_visit,
        vec![
            ".. (remonter)",
            "[OU] Paie",
            "[Utilisateur] Jean DUPONT (jean.dupont)",
        ]
    );
    assert_eq!(first_visit, second_visit);
}

#[test]
fn empty_root_cancels_without_a_menu() {
    let directory = InMemoryDirectory::new();
    directory.add_container(root());
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    let mut menu = list_menu([KeyCode::Enter]);

    assert!(browser.browse(&mut menu).is_cancelled());
    assert_eq!(menu.console().keys_read(), 0);
    assert_eq!(menu.console().hide_count(), 0);
}

#[test]
fn unreadable_level_degrades_to_remaining_entries() {
    let directory = sample_directory();
    directory.fail_containers_at(&root().child_ou("Compta"));
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // Root -> Compta (sub-OUs unreadable) -> Jean DUPONT
    let mut menu = list_menu([KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);

    let outcome = browser.browse(&mut menu);

    assert_eq!(
        outcome.record().map(|r| r.identifier),
        Some("jean.dupont".to_string())
    );
    let errors: Vec<&str> = menu.console().lines_with_style(Style::Error).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Impossible d'interroger"));
}

#[test]
fn step_limit_stops_endless_wandering() {
    let directory = sample_directory();
    let browser = DirectoryTreeBrowser::new(
        &directory,
        BrowserOptions::default().with_root(root()).with_max_steps(3),
    );
    // Down into Compta and back up, forever.
    let mut menu = list_menu([KeyCode::Enter; 10]);

    assert!(browser.browse(&mut menu).is_cancelled());
    assert_eq!(menu.console().keys_read(), 3);
    let errors: Vec<&str> = menu.console().lines_with_style(Style::Error).collect();
    assert_eq!(errors, vec!["[FAIL] Navigation interrompue après 3 étapes"]);
}

#[test]
fn terminal_failure_cancels() {
    let directory = sample_directory();
    let browser =
        DirectoryTreeBrowser::new(&directory, BrowserOptions::default().with_root(root()));
    // The script runs out while the Compta menu waits for a key.
    let mut menu = list_menu([KeyCode::Enter]);

    assert!(browser.browse(&mut menu).is_cancelled());
    assert!(xanadu::ui::console::Console::cursor_visible(menu.console()));
}
