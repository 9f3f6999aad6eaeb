//! Filesystem port for inventory I/O and existence checks.

use std::path::Path;

/// Boxed error returned across the port boundary.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Provides the filesystem operations a linking run needs.
///
/// Abstracting the filesystem allows recording a run and replaying it
/// deterministically without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
