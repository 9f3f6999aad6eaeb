//! Where the inventory lives and which directory its paths are relative to.

use std::path::{Path, PathBuf};

/// Environment variable naming the inventory document.
pub const INVENTORY_ENV: &str = "INVLINK_INVENTORY";
/// Environment variable naming the root directory.
pub const ROOT_ENV: &str = "INVLINK_ROOT";
/// Inventory used when neither a flag nor the environment names one.
pub const DEFAULT_INVENTORY: &str = "WORKSPACE_INVENTORY.md";

/// The two inputs of a linking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkerConfig {
    /// Inventory document, read and rewritten in place.
    pub inventory: PathBuf,
    /// Directory that link targets are relative to.
    pub root: PathBuf,
}

impl LinkerConfig {
    /// Resolves the config from CLI flags, then the process environment, then defaults.
    #[must_use]
    pub fn resolve(inventory: Option<&Path>, root: Option<&Path>) -> Self {
        Self::resolve_with(inventory, root, |key| std::env::var(key).ok())
    }

    /// Same as [`LinkerConfig::resolve`] with an explicit environment lookup.
    ///
    /// Without an explicit root, the inventory's own directory is used.
    pub fn resolve_with<F>(inventory: Option<&Path>, root: Option<&Path>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let inventory = inventory.map_or_else(
            || env(INVENTORY_ENV).map_or_else(|| PathBuf::from(DEFAULT_INVENTORY), PathBuf::from),
            Path::to_path_buf,
        );

        let root = root.map(Path::to_path_buf).or_else(|| env(ROOT_ENV).map(PathBuf::from));
        let root = root.unwrap_or_else(|| default_root(&inventory));

        Self { inventory, root }
    }
}

/// Parent directory of `inventory`, or `.` for a bare filename.
fn default_root(inventory: &Path) -> PathBuf {
    match inventory.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_inventory_in_current_directory() {
        let config = LinkerConfig::resolve_with(None, None, no_env);
        assert_eq!(config.inventory, PathBuf::from(DEFAULT_INVENTORY));
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn root_defaults_to_inventory_parent() {
        let config =
            LinkerConfig::resolve_with(Some(Path::new("/work/project/INV.md")), None, no_env);
        assert_eq!(config.root, PathBuf::from("/work/project"));
    }

    #[test]
    fn environment_fills_missing_flags() {
        let env = |key: &str| match key {
            INVENTORY_ENV => Some("/env/inv.md".to_string()),
            ROOT_ENV => Some("/env/root".to_string()),
            _ => None,
        };
        let config = LinkerConfig::resolve_with(None, None, env);
        assert_eq!(config.inventory, PathBuf::from("/env/inv.md"));
        assert_eq!(config.root, PathBuf::from("/env/root"));
    }

    #[test]
    fn flags_beat_environment() {
        let env = |_: &str| Some("/from/env".to_string());
        let config = LinkerConfig::resolve_with(
            Some(Path::new("flag.md")),
            Some(Path::new("/flag/root")),
            env,
        );
        assert_eq!(config.inventory, PathBuf::from("flag.md"));
        assert_eq!(config.root, PathBuf::from("/flag/root"));
    }
}
