//! Replaying adapter for the `WordSource` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::WordSource;

/// Replays recorded words from a cassette, ignoring the requested seed.
pub struct ReplayingWordSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingWordSource {
    /// Creates a new replaying word source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl WordSource for ReplayingWordSource {
    fn silly_word(&self, _seed: u64) -> String {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("words", "silly_word");
            interaction.output
        };
        output.as_str().expect("words::silly_word: expected string output").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::{interaction, make_replayer};
    use serde_json::json;

    #[test]
    fn replays_words_in_order() {
        let replayer = make_replayer(vec![
            interaction(0, "words", "silly_word", json!("Wobblepaws")),
            interaction(1, "words", "silly_word", json!("Gigglesnout")),
        ]);
        let words = ReplayingWordSource::new(replayer);
        assert_eq!(words.silly_word(1), "Wobblepaws");
        assert_eq!(words.silly_word(1), "Gigglesnout");
    }
}
