//! Interactive main menu
//!
//! Loops on a list menu until the user picks "Quitter", presses the quit
//! key or Escape. A failing action is reported and the menu comes back.

use anyhow::Result;
use dialoguer::Input;
use tracing::error;

use xanadu::domain::ports::{Menu, MenuChoice};
use xanadu::presentation::factory;
use xanadu::ui::theme::XanaduTheme;

use super::CommandContext;

pub const MAIN_MENU_TITLE: &str = "Administration Xanadu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Browse,
    Tree,
    Search,
    Quit,
}

impl MainAction {
    pub const ALL: [MainAction; 4] = [
        MainAction::Browse,
        MainAction::Tree,
        MainAction::Search,
        MainAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainAction::Browse => "Parcourir les utilisateurs",
            MainAction::Tree => "Afficher l'arborescence",
            MainAction::Search => "Rechercher un utilisateur",
            MainAction::Quit => "Quitter",
        }
    }
}

pub fn cmd_interactive(ctx: &CommandContext) -> Result<()> {
    if !ctx.ui.interactive() {
        println!("Aucune commande fournie.");
        println!("Essayez : `xanadu tree` ou `xanadu --help`");
        return Ok(());
    }

    let browser = factory::create_browser(&ctx.config, None);
    let mut menu = factory::create_list_menu(&ctx.config, ctx.ui.color, ctx.ui.unicode);

    main_menu_loop(&mut menu, |menu, action| match action {
        MainAction::Browse => {
            let outcome = browser.browse(menu);
            super::print_outcome(&outcome, &ctx.ui);
            Ok(())
        }
        MainAction::Tree => super::tree::cmd_tree(ctx, None, None),
        MainAction::Search => search(ctx),
        MainAction::Quit => Ok(()),
    })
}

/// Run the main menu until a quitting choice.
///
/// Errors from `dispatch` are printed and the loop goes on; a failing
/// menu ends the loop with that error.
pub(crate) fn main_menu_loop<M: Menu>(
    menu: &mut M,
    mut dispatch: impl FnMut(&mut M, MainAction) -> Result<()>,
) -> Result<()> {
    let labels: Vec<String> = MainAction::ALL
        .iter()
        .map(|action| action.label().to_string())
        .collect();

    loop {
        let action = match menu.select(MAIN_MENU_TITLE, &labels)? {
            MenuChoice::Selected(index) => MainAction::ALL
                .get(index)
                .copied()
                .unwrap_or(MainAction::Quit),
            MenuChoice::Cancelled | MenuChoice::Quit => MainAction::Quit,
        };
        if action == MainAction::Quit {
            return Ok(());
        }

        if let Err(err) = dispatch(menu, action) {
            error!(?action, error = %err, "main menu action failed");
            eprintln!("Erreur : {:#}", err);
        }
    }
}

fn search(ctx: &CommandContext) -> Result<()> {
    let theme = XanaduTheme::new(ctx.ui.unicode);
    let identifier: String = Input::with_theme(&theme)
        .with_prompt("Identifiant")
        .allow_empty(true)
        .interact_text()?;

    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(());
    }
    super::show::cmd_show(ctx, identifier)
}
