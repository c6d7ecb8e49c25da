//! Per-player collection counters.

use std::collections::BTreeMap;

use super::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: BTreeMap<PlayerId, u8>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            scores: BTreeMap::from_iter(PlayerId::iter().map(|player| (*player, 0))),
        }
    }

    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores.get(&player).copied().unwrap_or_default()
    }

    /// Increments the player's counter and returns the new value.
    pub fn increment(&mut self, player: PlayerId) -> u8 {
        let score = self.scores.entry(player).or_default();
        *score = score.saturating_add(1);
        *score
    }

    pub fn clear(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown on the score display for one player.
pub fn score_label(player: PlayerId, score: u8) -> String {
    format!("{player}: {score}")
}
