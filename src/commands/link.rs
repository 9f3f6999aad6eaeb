//! `invlink link` command.

use crate::config::LinkerConfig;
use crate::context::ServiceContext;
use crate::inventory;

/// Message printed once a run has written the inventory.
pub const COMPLETION_MESSAGE: &str = "Inventory processing complete.";

/// Execute the `link` command.
///
/// Rewrites the inventory in place, or prints the rewritten document to
/// stdout when `dry_run` is set.
///
/// # Errors
///
/// Returns an error string if the inventory cannot be read or written.
pub fn run(ctx: &ServiceContext, config: &LinkerConfig, dry_run: bool) -> Result<(), String> {
    if dry_run {
        let outcome = inventory::preview(ctx.fs.as_ref(), config)?;
        print!("{}", outcome.document);
        eprintln!("{}", outcome.report.summary());
        return Ok(());
    }

    let report = inventory::link_in_place(ctx.fs.as_ref(), config)?;
    println!("{COMPLETION_MESSAGE}");
    println!("{}", report.summary());
    Ok(())
}
