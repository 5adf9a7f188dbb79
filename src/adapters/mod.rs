//! Adapter implementations for the port traits.
//!
//! - `live`: real clock, file-backed tag store, built-in silly words.
//! - `recording`: wrappers that capture port traffic into cassettes.
//! - `replaying`: adapters that serve answers from recorded cassettes.

pub mod live;
pub mod recording;
pub mod replaying;
