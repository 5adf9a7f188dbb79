//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Per-port `CassetteRecorder`s writing into one timestamped directory.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for lookup interactions.
    pub lookup: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for word source interactions.
    pub words: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing to `<root>/<timestamp>/<port>.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamped directory already exists or
    /// cannot be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = commit_hash();
        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, commit.as_str())))
        };

        Ok(Self {
            clock: make_recorder("clock"),
            lookup: make_recorder("lookup"),
            words: make_recorder("words"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared (the context using it
    /// was not dropped) or a cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.lookup, "lookup")?;
        finish_one(self.words, "words")?;

        Ok(self.output_dir)
    }
}

/// Current git commit hash, or `"unknown"` outside a git checkout.
fn commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| {
            tracing::debug!("could not read git commit hash, using 'unknown'");
            "unknown".to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_output_directory_and_finishes() {
        let root = std::env::temp_dir().join("wallstag_session_test");
        let session = RecordingSession::new(&root).expect("session should start");
        let dir = session.output_dir().to_path_buf();
        assert!(dir.exists());

        session.clock.lock().unwrap().record(
            "clock",
            "now",
            serde_json::json!({}),
            serde_json::json!("2024-01-01T00:00:00Z"),
        );

        let finished = session.finish().expect("finish should succeed");
        assert_eq!(finished, dir);
        for port in ["clock", "lookup", "words"] {
            assert!(dir.join(format!("{port}.cassette.yaml")).exists(), "{port} cassette missing");
        }

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn finish_fails_while_recorder_is_shared() {
        let root = std::env::temp_dir().join("wallstag_session_shared_test");
        let session = RecordingSession::new(&root).unwrap();
        let _held = Arc::clone(&session.lookup);

        let err = session.finish().unwrap_err();
        assert!(err.contains("lookup still has references"));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn commit_hash_is_never_empty() {
        assert!(!commit_hash().is_empty());
    }
}
