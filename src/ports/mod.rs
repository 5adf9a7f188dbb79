//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the tag generator and a
//! collaborator it does not own (time, the taken-tag store, the silly word
//! source). Implementations live in `src/adapters/`.

pub mod clock;
pub mod lookup;
pub mod word_source;

pub use clock::Clock;
pub use lookup::LookUpRepository;
pub use word_source::WordSource;

/// Error type returned by fallible port calls.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
