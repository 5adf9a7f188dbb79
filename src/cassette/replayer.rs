//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions back in order, with an independent
/// queue per `port::method` pair.
#[derive(Debug, Clone)]
pub struct CassetteReplayer {
    queues: HashMap<String, VecDeque<Interaction>>,
    last_served: HashMap<String, u64>,
}

fn queue_key(port: &str, method: &str) -> String {
    format!("{port}::{method}")
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<String, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry(queue_key(&interaction.port, &interaction.method))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, last_served: HashMap::new() }
    }

    /// Number of interactions not yet served for `port` and `method`.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.queues.get(&queue_key(port, method)).map_or(0, VecDeque::len)
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair. The
    /// message names what was requested and which pairs the cassette holds.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = queue_key(port, method);

        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<&str> = self.queues.keys().map(String::as_str).collect();
            available.sort_unstable();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = queue.pop_front() else {
            let last_seq = self.last_served.get(&key).copied().unwrap_or_default();
            panic!(
                "Cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has been consumed. Last interaction was seq={last_seq}."
            );
        };

        self.last_served.insert(key, interaction.seq);
        interaction
    }
}
