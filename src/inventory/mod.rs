//! Inventory linking: turns file bullets into markdown links.
//!
//! An inventory is a markdown bullet tree where directories are bold
//! (`- **core/**`) and files are bare tokens followed by an em-dash
//! (`- User.java — model`). Indentation decides which directories a file
//! lives under.

pub mod line;
pub mod linker;
pub mod report;
pub mod stack;

pub use linker::{LinkOutcome, Linker};
pub use report::LinkReport;

use crate::config::LinkerConfig;
use crate::ports::FileSystem;

/// Reads the inventory and links it without writing anything back.
///
/// # Errors
///
/// Returns an error string if the inventory cannot be read.
pub fn preview(fs: &dyn FileSystem, config: &LinkerConfig) -> Result<LinkOutcome, String> {
    let text = fs.read_to_string(&config.inventory).map_err(|e| {
        format!("failed to read inventory {}: {e}", config.inventory.display())
    })?;
    Ok(Linker::new(fs, &config.root).link_document(&text))
}

/// Links the inventory and writes the result back to the same path.
///
/// # Errors
///
/// Returns an error string if the inventory cannot be read or written.
pub fn link_in_place(fs: &dyn FileSystem, config: &LinkerConfig) -> Result<LinkReport, String> {
    let outcome = preview(fs, config)?;
    fs.write(&config.inventory, &outcome.document).map_err(|e| {
        format!("failed to write inventory {}: {e}", config.inventory.display())
    })?;
    Ok(outcome.report)
}
