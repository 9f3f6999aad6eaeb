//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number, assigned by the recorder.
    pub seq: u64,
    /// Port name (always `"fs"` today).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Return value. Fallible methods use `{"ok": ..}` / `{"err": ..}`.
    pub output: serde_json::Value,
}

/// A recorded linking session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Inventory document the session linked.
    pub inventory: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error string if the YAML does not describe a cassette.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("invalid cassette: {e}"))
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
name: sample
recorded_at: 2025-06-15T10:00:00Z
inventory: /project/WORKSPACE_INVENTORY.md
interactions:
  - seq: 0
    port: fs
    method: exists
    input: { path: /project/core/User.java }
    output: true
"#;
        let cassette = Cassette::from_yaml(yaml).unwrap();
        assert_eq!(cassette.inventory, "/project/WORKSPACE_INVENTORY.md");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].method, "exists");
        assert_eq!(cassette.interactions[0].output, json!(true));
    }

    #[test]
    fn rejects_non_cassette_yaml() {
        assert!(Cassette::from_yaml("just: a map").is_err());
    }
}
