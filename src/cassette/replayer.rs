//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette, one queue per port/method pair.
///
/// Calls on different ports do not affect each other's position.
#[derive(Debug, Clone)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Creates a replayer over all interactions of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Interactions still queued for `port`/`method`.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.queues.get(&(port.to_string(), method.to_string())).map_or(0, VecDeque::len)
    }

    /// Takes the next interaction for `port`/`method`, if any is left.
    pub fn try_next(&mut self, port: &str, method: &str) -> Option<Interaction> {
        self.queues.get_mut(&(port.to_string(), method.to_string()))?.pop_front()
    }

    /// Takes the next interaction for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette holds no further interaction for the pair,
    /// listing the pairs that were recorded.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        if let Some(interaction) = self.try_next(port, method) {
            return interaction;
        }
        let mut recorded: Vec<String> =
            self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
        recorded.sort();
        panic!(
            "Cassette exhausted: nothing left for port={port:?} method={method:?}. \
             Recorded pairs: [{}]",
            recorded.join(", ")
        );
    }
}
