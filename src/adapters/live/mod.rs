//! Live adapters for real external interactions.

pub mod clock;
pub mod lookup;
pub mod word_source;

pub use clock::LiveClock;
pub use lookup::{NothingTaken, TakenTagsFile};
pub use word_source::SillyWordSource;
