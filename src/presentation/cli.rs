//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --snapshot, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand opens the interactive main menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::DistinguishedName;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Xanadu - Active Directory browser for the Xanadu domain
#[derive(Parser, Debug)]
#[command(name = "xanadu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'xanadu' without arguments for the interactive menu.")]
pub struct Cli {
    /// Configuration file (default: ./xanadu.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory export to read (overrides directory.snapshot)
    #[arg(long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the OU tree and pick a user account
    Browse {
        /// Container to start from (overrides directory.root)
        #[arg(long, value_name = "DN")]
        root: Option<DistinguishedName>,
    },

    /// Print the OU tree with its user accounts
    Tree {
        /// Container to start from (overrides directory.root)
        #[arg(long, value_name = "DN")]
        root: Option<DistinguishedName>,

        /// Levels to expand below the root
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Show one user account
    Show {
        /// Account identifier (sAMAccountName)
        identifier: String,
    },
}
