//! Xanadu CLI - Active Directory browser for the Xanadu domain
//!
//! Usage: xanadu [COMMAND]
//!
//! Commands:
//!   browse  Browse the OU tree and pick a user account
//!   tree    Print the OU tree with its user accounts
//!   show    Show one user account
//!
//! Without a command, the interactive main menu opens.

mod commands;

use anyhow::Result;
use clap::Parser;

use xanadu::presentation::{Cli, Commands};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    xanadu::logging::init(cli.verbose);

    let cwd = std::env::current_dir()?;
    let ctx = CommandContext::load(&cli, &cwd)?;

    match cli.command {
        None => commands::interactive::cmd_interactive(&ctx),
        Some(Commands::Browse { root }) => commands::browse::cmd_browse(&ctx, root),
        Some(Commands::Tree { root, depth }) => commands::tree::cmd_tree(&ctx, root, depth),
        Some(Commands::Show { identifier }) => commands::show::cmd_show(&ctx, &identifier),
    }
}
