//! Directory context rebuilt from indentation.

/// An open directory and the indentation it was declared at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Leading whitespace count of the directory bullet.
    pub indent: usize,
    /// Directory name without trailing separator.
    pub name: String,
}

/// Ancestor chain for the line currently being processed.
///
/// Entries are strictly increasing in `indent` from bottom to top.
#[derive(Debug, Default)]
pub struct DirectoryStack {
    entries: Vec<DirectoryEntry>,
}

impl DirectoryStack {
    /// Creates an empty stack (root context).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes every open directory declared at `indent` or deeper.
    fn close_to(&mut self, indent: usize) {
        while self.entries.last().is_some_and(|top| top.indent >= indent) {
            self.entries.pop();
        }
    }

    /// Opens a directory declared at `indent`, closing siblings and their subtrees first.
    pub fn enter(&mut self, indent: usize, name: &str) {
        self.close_to(indent);
        self.entries.push(DirectoryEntry { indent, name: name.to_string() });
    }

    /// Returns the ancestor names for a line at `indent`, shallowest first.
    ///
    /// Directories at `indent` or deeper are closed as a side effect.
    pub fn ancestors_at(&mut self, indent: usize) -> Vec<&str> {
        self.close_to(indent);
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of open directories.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

/// Joins ancestor names and a filename with forward slashes.
///
/// Empty names (a bullet like `- **/**`) contribute nothing.
#[must_use]
pub fn relative_path(ancestors: &[&str], filename: &str) -> String {
    ancestors
        .iter()
        .copied()
        .filter(|name| !name.is_empty())
        .chain(std::iter::once(filename))
        .collect::<Vec<_>>()
        .join("/")
}
