//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions in recorded order, one queue per
/// `(port, method)` pair.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
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

    /// Take the next interaction recorded for `port::method`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the pair when the cassette has no (more)
    /// interactions for it.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let key = (port.to_string(), method.to_string());
        match self.queues.get_mut(&key) {
            Some(queue) => queue.pop_front().ok_or_else(|| {
                format!("Cassette exhausted: all interactions for {port}::{method} have been consumed")
            }),
            None => Err(format!("Cassette exhausted: no interactions recorded for {port}::{method}")),
        }
    }

    /// Interactions not yet consumed, across all pairs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
