//! Word source port for whimsical, human-readable words.

/// Produces a silly, human-readable word.
///
/// The seed is supplied per call, so implementations never share random
/// state between callers. The same seed must always produce the same word.
pub trait WordSource: Send + Sync {
    /// Returns a whimsical word chosen by `seed`.
    fn silly_word(&self, seed: u64) -> String;
}
