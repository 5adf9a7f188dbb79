//! Live adapter for the `WordSource` port.

use petname::{Generator, Petnames};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ports::WordSource;

const SILLY_FIRST: &str = "
    Bubble Cheddar Chuckle Crumb Dizzy Doodle Fizz Flapper Fluffy Frizzle
    Fuzzy Giggle Gobble Goober Grumble Jelly Jiggle Kooky Lolly Muffin
    Noodle Nugget Pickle Piffle Pudding Puddle Quibble Rumble Scooter Snicker
    Sniffle Snuggle Sprinkle Squiggle Tickle Toot Waffle Wiggle Wobble Zippy
";

const SILLY_LAST: &str = "
    beak berry bottom bucket bug burger cake cheeks chops face
    fang feet flop fluff gizzard head hopper jaw knees loaf
    monger muffin nose nugget paws pants puff socks snout sprout
    stack tail toes tooth trousers tummy wagon whistle wick wort
";

/// Fallback when the word lists yield nothing.
const FALLBACK: &str = "Sillyname";

/// Builds silly two-part words such as `Wobblepaws` from built-in lists.
///
/// Each call seeds its own generator from the supplied seed; no state is
/// kept between calls.
#[derive(Debug, Clone)]
pub struct SillyWordSource {
    names: Petnames<'static>,
}

impl SillyWordSource {
    /// Creates a new silly word source.
    #[must_use]
    pub fn new() -> Self {
        Self { names: Petnames::new(SILLY_FIRST, "", SILLY_LAST) }
    }
}

impl Default for SillyWordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for SillyWordSource {
    fn silly_word(&self, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        self.names.generate(&mut rng, 2, "").unwrap_or_else(|| FALLBACK.to_string())
    }
}
