//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{FileSystem, PortError};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> Result<Value, PortError> {
        let mut replayer =
            self.replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
        Ok(replayer.next_interaction("fs", method)?.output)
    }
}

/// Extracts a result from a cassette output written as `{"ok": ..}` or `{"err": ..}`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value).map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        extract_result(self.next_output("read_to_string")?, "fs::read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        let output = self.next_output("write")?;
        if let Some(err) = output.get("err") {
            return Err(err.as_str().unwrap_or("unknown error").to_string().into());
        }
        Ok(())
    }

    /// # Panics
    ///
    /// Panics when the cassette has no matching `exists` entry, since the
    /// port has no way to report the mismatch.
    fn exists(&self, path: &Path) -> bool {
        match self.next_output("exists") {
            Ok(Value::Bool(found)) => found,
            Ok(other) => panic!("fs::exists({}): expected boolean, got {other}", path.display()),
            Err(e) => panic!("fs::exists({}): {e}", path.display()),
        }
    }
}
