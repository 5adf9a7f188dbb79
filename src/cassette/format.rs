//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call made through a port, with its arguments and answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name: `clock`, `lookup` or `words`.
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Value the port returned.
    pub output: serde_json::Value,
}

/// An ordered log of port interactions, stored as YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Source revision the recording was made from.
    pub commit: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Creates an empty cassette stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recorded_at: Utc::now(),
            commit: commit.into(),
            interactions: Vec::new(),
        }
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or is not a cassette.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Serializes the cassette to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        std::fs::write(path, yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_cassette() -> Cassette {
        let mut cassette = Cassette::new("test-cassette", "abc123");
        cassette.interactions = vec![
            Interaction {
                seq: 0,
                port: "words".into(),
                method: "silly_word".into(),
                input: json!({"seed": 17}),
                output: json!("Noodlefang"),
            },
            Interaction {
                seq: 1,
                port: "lookup".into(),
                method: "data_exists".into(),
                input: json!({"tag": "noodle"}),
                output: json!({"ok": false}),
            },
        ];
        cassette
    }

    #[test]
    fn yaml_keeps_json_payloads() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        assert!(yaml.contains("silly_word"));
        assert!(yaml.contains("Noodlefang"));

        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(deserialized.interactions[1].output, json!({"ok": false}));
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("wallstag_cassette_format_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.cassette.yaml");

        let cassette = sample_cassette();
        cassette.save(&path).unwrap();
        assert_eq!(Cassette::load(&path).unwrap(), cassette);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(Path::new("/nonexistent/wallstag.cassette.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
