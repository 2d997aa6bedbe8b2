//! Scenario: the directory export is refreshed while the menu is open.
//!
//! The browser re-queries the directory at every step and re-reads the
//! chosen record, so changes made between two key presses must show up.

use std::io;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use tempfile::TempDir;

use xanadu::ui::console::{Console, ScriptedConsole};
use xanadu::ui::primitives::text::Style;
use xanadu::{BrowserOptions, DirectoryTreeBrowser, ListMenu, SelectionOutcome, SnapshotDirectory};

use crate::common::{root, EXPORT_JSON};

/// Scripted console that runs a hook right before the n-th key is read
struct HookConsole {
    inner: ScriptedConsole,
    hook: Option<(usize, Box<dyn FnOnce()>)>,
}

impl HookConsole {
    fn new(
        keys: impl IntoIterator<Item = KeyCode>,
        before_key: usize,
        hook: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            inner: ScriptedConsole::with_keys(keys),
            hook: Some((before_key, Box::new(hook))),
        }
    }
}

impl Console for HookConsole {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        if matches!(self.hook, Some((n, _)) if n == self.inner.keys_read()) {
            if let Some((_, hook)) = self.hook.take() {
                hook();
            }
        }
        self.inner.read_key()
    }

    fn write_line(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.inner.write_line(text, style)
    }

    fn cursor_visible(&self) -> bool {
        self.inner.cursor_visible()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.inner.set_cursor_visible(visible)
    }

    fn clear_last_lines(&mut self, count: usize) -> io::Result<()> {
        self.inner.clear_last_lines(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn size(&self) -> Option<(u16, u16)> {
        self.inner.size()
    }
}

fn export_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("xanadu-directory.json");
    std::fs::write(&path, EXPORT_JSON).unwrap();
    (dir, path)
}

fn rewrite(path: PathBuf, from: &'static str, to: &'static str) -> impl FnOnce() {
    move || {
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(from), "fixture should contain {from}");
        std::fs::write(&path, content.replacen(from, to, 1)).unwrap();
    }
}

#[test]
fn record_deleted_before_confirmation_is_reported() {
    let (_dir, path) = export_dir();
    let browser = DirectoryTreeBrowser::new(
        SnapshotDirectory::new(&path),
        BrowserOptions::default().with_root(root()),
    );
    // Root -> Compta -> (jean.dupont deleted) -> Jean DUPONT
    let console = HookConsole::new(
        [KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        3,
        rewrite(path.clone(), "\"jean.dupont\"", "\"jean.dupont.old\""),
    );
    let mut menu = ListMenu::new(console).with_unicode(false);

    let outcome = browser.browse(&mut menu);

    assert_eq!(outcome, SelectionOutcome::Cancelled);
    let errors: Vec<&str> = menu.console().inner.lines_with_style(Style::Error).collect();
    assert_eq!(errors, vec!["[FAIL] Utilisateur introuvable : jean.dupont"]);
}

#[test]
fn chosen_record_reflects_latest_export() {
    let (_dir, path) = export_dir();
    let browser = DirectoryTreeBrowser::new(
        SnapshotDirectory::new(&path),
        BrowserOptions::default().with_root(root()),
    );
    let console = HookConsole::new(
        [KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        3,
        rewrite(path.clone(), "jean.dupont@xanadu.local", "j.dupont@xanadu.local"),
    );
    let mut menu = ListMenu::new(console).with_unicode(false);

    let record = browser.browse(&mut menu).record().expect("record chosen");

    assert_eq!(record.identifier, "jean.dupont");
    assert_eq!(record.email.as_deref(), Some("j.dupont@xanadu.local"));
}

#[test]
fn new_ou_appears_when_going_back_up() {
    let (_dir, path) = export_dir();
    let browser = DirectoryTreeBrowser::new(
        SnapshotDirectory::new(&path),
        BrowserOptions::default().with_root(root()),
    );
    // Root -> Compta -> (Achats created) -> Up -> Esc
    let console = HookConsole::new(
        [KeyCode::Enter, KeyCode::Enter, KeyCode::Esc],
        1,
        rewrite(
            path.clone(),
            r#"{ "distinguishedName": "OU=Direction,OU=Xanadu,DC=xanadu,DC=local" }"#,
            r#"{ "distinguishedName": "OU=Direction,OU=Xanadu,DC=xanadu,DC=local" },
    { "distinguishedName": "OU=Achats,OU=Xanadu,DC=xanadu,DC=local" }"#,
        ),
    );
    let mut menu = ListMenu::new(console).with_unicode(false);

    assert!(browser.browse(&mut menu).is_cancelled());

    let transcript: Vec<&str> = menu.console().inner.transcript().collect();
    let achats = transcript
        .iter()
        .filter(|line| line.ends_with("[OU] Achats"))
        .count();
    assert_eq!(achats, 1);
    assert_eq!(
        transcript.last(),
        Some(&"Haut/Bas naviguer - Entree valider - Echap annuler - q quitter")
    );
}

#[test]
fn vanished_export_degrades_to_query_failures() {
    let (_dir, path) = export_dir();
    let browser = DirectoryTreeBrowser::new(
        SnapshotDirectory::new(&path),
        BrowserOptions::default().with_root(root()),
    );
    let removed = path.clone();
    // Root -> (export deleted) -> Compta
    let console = HookConsole::new([KeyCode::Enter, KeyCode::Esc], 0, move || {
        std::fs::remove_file(&removed).unwrap();
    });
    let mut menu = ListMenu::new(console).with_unicode(false);

    assert!(browser.browse(&mut menu).is_cancelled());

    let errors: Vec<&str> = menu.console().inner.lines_with_style(Style::Error).collect();
    assert_eq!(errors.len(), 2, "both Compta queries fail: {errors:?}");
    assert!(errors.iter().all(|e| e.starts_with("[FAIL] Impossible d'interroger")));
    let warnings: Vec<&str> = menu.console().inner.lines_with_style(Style::Warning).collect();
    assert_eq!(warnings.len(), 1);
}
