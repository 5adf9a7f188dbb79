//! Replaying adapters that replay recorded interactions.

pub mod clock;
pub mod lookup;
pub mod word_source;

pub use clock::ReplayingClock;
pub use lookup::ReplayingLookUp;
pub use word_source::ReplayingWordSource;
