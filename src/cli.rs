//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `invlink`.
#[derive(Debug, Parser)]
#[command(name = "invlink", version, about = "Link file mentions in a workspace inventory")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Inventory and root selection shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Inventory document [env: INVLINK_INVENTORY, default: WORKSPACE_INVENTORY.md].
    #[arg(long, short)]
    pub inventory: Option<PathBuf>,
    /// Directory link targets are relative to [env: INVLINK_ROOT, default: inventory's directory].
    #[arg(long, short)]
    pub root: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite file bullets into links, in place.
    Link {
        /// Which inventory to link.
        #[command(flatten)]
        target: TargetArgs,
        /// Print the rewritten document instead of writing it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Report file bullets that do not resolve; fails if any exist.
    Check {
        /// Which inventory to check.
        #[command(flatten)]
        target: TargetArgs,
    },
}

impl Command {
    /// Inventory selection of this command.
    #[must_use]
    pub fn target(&self) -> &TargetArgs {
        match self {
            Command::Link { target, .. } | Command::Check { target } => target,
        }
    }
}
