//! Round records: one score per player for a single round.
//!
//! A record is a map from `PlayerId` to score. Players absent from the map
//! scored 0 for that round, so a record may hold a subset of the roster.
//! Keys are kept ordered, which makes the JSON snapshot deterministic.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::Score;

/// Scores for one round, keyed by player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundRecord(OrdMap<PlayerId, Score>);

impl RoundRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a score (builder style).
    #[must_use]
    pub fn with_score(mut self, player: PlayerId, score: Score) -> Self {
        self.0.insert(player, score);
        self
    }

    /// Set a player's score, replacing any previous value.
    pub fn set_score(&mut self, player: PlayerId, score: Score) {
        self.0.insert(player, score);
    }

    /// Score for a player; absent players scored 0.
    #[must_use]
    pub fn score_for(&self, player: &PlayerId) -> Score {
        self.0.get(player).copied().unwrap_or(0)
    }

    /// Whether the record holds an explicit entry for a player.
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.0.contains_key(player)
    }

    /// New record with `patch` applied: patch keys overwrite, all other
    /// entries are kept.
    #[must_use]
    pub fn merged(&self, patch: &RoundRecord) -> Self {
        let mut merged = self.0.clone();
        for (player, score) in patch.0.iter() {
            merged.insert(player.clone(), *score);
        }
        Self(merged)
    }

    /// Iterate over explicit entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &Score)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PlayerId, Score)> for RoundRecord {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, Score)> for RoundRecord {
    fn from_iter<I: IntoIterator<Item = (&'a str, Score)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(id, score)| (PlayerId::new(id), score))
            .collect()
    }
}
