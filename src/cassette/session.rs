//! Recording session for a single linking run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the filesystem cassette inside a session directory.
pub const FS_CASSETTE: &str = "fs.cassette.yaml";

/// Owns the recorder shared with the recording filesystem adapter.
///
/// Cassettes land in a timestamped directory under the base directory.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing the cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing to `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The timestamped directory already exists
    /// - The directory cannot be created
    pub fn new(base: &Path, inventory: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let recorder = CassetteRecorder::new(
            output_dir.join(FS_CASSETTE),
            format!("{timestamp}-fs"),
            inventory.display().to_string(),
        );

        Ok(Self { fs: Arc::new(Mutex::new(recorder)), output_dir })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the cassette files and return their directory.
    ///
    /// Every adapter holding the recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or a cassette cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.fs)
            .map_err(|_| "Recording adapter for fs still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for fs poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write fs cassette: {e}"))?;
        Ok(self.output_dir)
    }
}
