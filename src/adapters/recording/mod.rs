//! Recording adapters that capture interactions to cassettes.

pub mod clock;
pub mod lookup;
pub mod word_source;

pub use clock::RecordingClock;
pub use lookup::RecordingLookUp;
pub use word_source::RecordingWordSource;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record an interaction with a simple (non-Result) return value.
///
/// A value that fails to serialize is dropped from the cassette with a
/// warning; recording never changes what the wrapped port returns.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    match serde_json::to_value(output) {
        Ok(output_json) => push(recorder, port, method, input, output_json),
        Err(e) => tracing::warn!(port, method, error = %e, "failed to serialize recording output"),
    }
}

/// Record a `Result<T, E>` interaction.
///
/// `Ok(v)` is stored as `{"ok": v}` and `Err(e)` as `{"err": e.to_string()}`,
/// the shape the replaying adapters read back.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "ok": inner }),
            Err(e) => {
                tracing::warn!(port, method, error = %e, "failed to serialize Ok value");
                return;
            }
        },
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };
    push(recorder, port, method, input, output_json);
}

fn push<I: Serialize>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output_json: serde_json::Value,
) {
    let input_json = match serde_json::to_value(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(port, method, error = %e, "failed to serialize recording input");
            return;
        }
    };
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(_) => tracing::warn!(port, method, "recorder lock poisoned; interaction dropped"),
    }
}
