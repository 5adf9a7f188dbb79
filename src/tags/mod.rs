//! Tag generation: candidate sources, length normalization and the
//! uniqueness-checked retry loop.

pub mod derive;
pub mod generator;
pub mod normalize;

pub use derive::derive_name_tags;
pub use generator::{CandidateSource, TagBatch, TagGenerator};
