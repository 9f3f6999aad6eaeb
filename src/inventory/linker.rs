//! The linking pass over a whole inventory document.

use std::path::Path;

use log::{debug, warn};

use super::line::{classify, LineKind};
use super::report::{LinkReport, LinkedReference, UnresolvedReference};
use super::stack::{relative_path, DirectoryStack};
use crate::ports::FileSystem;

/// Rewritten document plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// The full rewritten text.
    pub document: String,
    /// Tally of linked and unresolved references.
    pub report: LinkReport,
}

impl LinkOutcome {
    /// `true` when the rewritten text differs from `original`.
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.document != original
    }
}

/// Resolves file bullets against a root directory through a [`FileSystem`].
pub struct Linker<'a> {
    fs: &'a dyn FileSystem,
    root: &'a Path,
}

impl<'a> Linker<'a> {
    /// Creates a linker that checks candidates under `root`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, root: &'a Path) -> Self {
        Self { fs, root }
    }

    /// Runs one pass over `text`.
    ///
    /// Line terminators are kept as they are, so lines that are not rewritten
    /// come out byte-for-byte identical.
    #[must_use]
    pub fn link_document(&self, text: &str) -> LinkOutcome {
        let mut stack = DirectoryStack::new();
        let mut report = LinkReport::default();
        let mut document = String::with_capacity(text.len());

        for (idx, line) in text.split_inclusive('\n').enumerate() {
            let number = idx + 1;
            match classify(line) {
                LineKind::Directory { indent, name } => {
                    stack.enter(indent, name);
                    report.directories += 1;
                    debug!("line {number}: open directory {name:?} at indent {indent}");
                    document.push_str(line);
                }
                LineKind::File { indent, filename } => {
                    let ancestors = stack.ancestors_at(indent);
                    let target = relative_path(&ancestors, filename);
                    let candidate = self.root.join(&target);

                    if self.fs.exists(&candidate) {
                        debug!("line {number}: {filename} -> {target}");
                        document.push_str(&substitute_link(line, filename, &target));
                        report.linked.push(LinkedReference { line: number, target });
                    } else {
                        warn!("File not found: {}", candidate.display());
                        document.push_str(line);
                        report.unresolved.push(UnresolvedReference {
                            line: number,
                            filename: filename.to_string(),
                            candidate,
                        });
                    }
                }
                LineKind::Other => document.push_str(line),
            }
        }

        LinkOutcome { document, report }
    }
}

/// Replaces the first occurrence of `filename` in `line` with `[filename](target)`.
///
/// Only the first occurrence is touched, even if that is not the bullet token.
#[must_use]
pub fn substitute_link(line: &str, filename: &str, target: &str) -> String {
    match line.find(filename) {
        Some(pos) => {
            let (prefix, rest) = line.split_at(pos);
            let suffix = &rest[filename.len()..];
            format!("{prefix}[{filename}]({target}){suffix}")
        }
        None => line.to_string(),
    }
}
