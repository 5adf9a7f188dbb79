//! Recording adapter for the `LookUpRepository` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{BoxError, LookUpRepository};

/// Records lookup queries while delegating to an inner store.
pub struct RecordingLookUp {
    inner: Box<dyn LookUpRepository>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingLookUp {
    /// Creates a new recording lookup wrapping the given store.
    pub fn new(inner: Box<dyn LookUpRepository>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct TagInput<'a> {
    tag: &'a str,
}

impl LookUpRepository for RecordingLookUp {
    fn data_exists(&self, tag: &str) -> Result<bool, BoxError> {
        let result = self.inner.data_exists(tag);
        record_result(&self.recorder, "lookup", "data_exists", &TagInput { tag }, &result);
        result
    }
}
