//! Command handlers for the `xanadu` binary

pub mod browse;
pub mod interactive;
pub mod show;
pub mod tree;

use std::path::Path;

use anyhow::{Context, Result};

use xanadu::config::Config;
use xanadu::domain::services::SelectionOutcome;
use xanadu::presentation::{factory, Cli};
use xanadu::ui::context::UiContext;
use xanadu::ui::views;

/// Everything a handler needs, resolved once from flags, env and files
pub struct CommandContext {
    pub config: Config,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn load(cli: &Cli, cwd: &Path) -> Result<Self> {
        let loaded = factory::load_config(cli.config.as_deref(), cwd, cli.snapshot.clone())
            .context("loading configuration")?;
        let ui = UiContext::new(cli.verbose, cli.color, &loaded.config);

        eprint!(
            "{}",
            views::config::render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
        );

        Ok(Self {
            config: loaded.config,
            ui,
        })
    }
}

/// Print the result of a browsing session
pub(crate) fn print_outcome(outcome: &SelectionOutcome, ui: &UiContext) {
    match outcome {
        SelectionOutcome::RecordChosen(record) => {
            println!();
            print!(
                "{}",
                views::record::render_record(record, ui.color, ui.unicode)
            );
        }
        SelectionOutcome::Cancelled => println!("Sélection annulée"),
    }
}
