//! Classification of single inventory lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bold bullet naming a directory, e.g. `- **core/** — domain model`.
static DIRECTORY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+\*\*([^*]+)/?\*\*").expect("directory pattern compiles"));

/// Bare token followed by an em-dash, e.g. `- User.java — model`.
static FILE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+(\S+)\s+—").expect("file pattern compiles"));

/// The shape of one inventory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A directory bullet. `name` has its trailing separators removed.
    Directory {
        /// Leading whitespace count of the raw line.
        indent: usize,
        /// Directory name.
        name: &'a str,
    },
    /// A file bullet whose token is a filename candidate.
    File {
        /// Leading whitespace count of the raw line.
        indent: usize,
        /// Token between the bullet marker and the em-dash.
        filename: &'a str,
    },
    /// Anything else; passed through untouched.
    Other,
}

/// Counts the leading whitespace characters of `line`.
#[must_use]
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Classifies a raw line (terminator included or not).
///
/// Directory bullets take precedence over file bullets.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    let stripped = line.trim();

    if let Some(caps) = DIRECTORY_LINE.captures(stripped) {
        let name = caps.get(1).map_or("", |m| m.as_str()).trim_end_matches('/');
        return LineKind::Directory { indent: indent_of(line), name };
    }

    if let Some(caps) = FILE_LINE.captures(stripped) {
        if let Some(token) = caps.get(1) {
            return LineKind::File { indent: indent_of(line), filename: token.as_str() };
        }
    }

    LineKind::Other
}
