//! `invlink check` command.

use crate::config::LinkerConfig;
use crate::context::ServiceContext;
use crate::inventory;

/// Execute the `check` command.
///
/// Links the inventory in memory and lists every unresolved file bullet.
///
/// # Errors
///
/// Returns an error string if the inventory cannot be read or if any file
/// bullet does not resolve.
pub fn run(ctx: &ServiceContext, config: &LinkerConfig) -> Result<(), String> {
    let outcome = inventory::preview(ctx.fs.as_ref(), config)?;
    let report = &outcome.report;

    for miss in &report.unresolved {
        println!("line {}: {} -> {}", miss.line, miss.filename, miss.candidate.display());
    }

    if report.is_clean() {
        println!("All {} file reference(s) resolve", report.linked.len());
        Ok(())
    } else {
        Err(format!(
            "{} unresolved file reference(s) in {}",
            report.unresolved.len(),
            config.inventory.display()
        ))
    }
}
