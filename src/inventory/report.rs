//! Per-run summary of what the linker did.

use std::path::PathBuf;

/// A file bullet that was rewritten into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedReference {
    /// 1-based line number in the inventory.
    pub line: usize,
    /// Link target relative to the root, forward slashes.
    pub target: String,
}

/// A file bullet whose candidate path does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// 1-based line number in the inventory.
    pub line: usize,
    /// Token taken from the bullet.
    pub filename: String,
    /// Path that was checked.
    pub candidate: PathBuf,
}

/// Tally of one linking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Directory bullets seen.
    pub directories: usize,
    /// Rewritten file bullets, in document order.
    pub linked: Vec<LinkedReference>,
    /// File bullets left as plain text, in document order.
    pub unresolved: Vec<UnresolvedReference>,
}

impl LinkReport {
    /// `true` when every file bullet resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// One-line human summary, e.g. `Linked 3 file(s), 1 unresolved`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Linked {} file(s), {} unresolved", self.linked.len(), self.unresolved.len())
    }
}
