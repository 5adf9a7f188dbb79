//! Replaying adapter for the `LookUpRepository` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{BoxError, LookUpRepository};

/// Replays recorded lookup answers from a cassette.
pub struct ReplayingLookUp {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingLookUp {
    /// Creates a new replaying lookup from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`; a bare value is
/// treated as `ok`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, BoxError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl LookUpRepository for ReplayingLookUp {
    fn data_exists(&self, _tag: &str) -> Result<bool, BoxError> {
        let output = {
            let mut replayer =
                self.replayer.lock().map_err(|_| "lookup replayer lock poisoned")?;
            let interaction = replayer.next_interaction("lookup", "data_exists");
            interaction.output
        };
        extract_result(&output, "lookup::data_exists")
    }
}
