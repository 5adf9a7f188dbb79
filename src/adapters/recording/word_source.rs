//! Recording adapter for the `WordSource` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::WordSource;

/// Records produced words while delegating to an inner source.
pub struct RecordingWordSource {
    inner: Box<dyn WordSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWordSource {
    /// Creates a new recording word source wrapping the given implementation.
    pub fn new(inner: Box<dyn WordSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct SeedInput {
    seed: u64,
}

impl WordSource for RecordingWordSource {
    fn silly_word(&self, seed: u64) -> String {
        let result = self.inner.silly_word(seed);
        record_interaction(&self.recorder, "words", "silly_word", &SeedInput { seed }, &result);
        result
    }
}
