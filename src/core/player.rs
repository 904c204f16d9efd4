//! Player identification and per-player standing.
//!
//! ## PlayerId
//!
//! Opaque string identifier assigned once at game start. The engine only
//! compares ids for equality and ordering; it never parses them.
//!
//! ## Player
//!
//! A player is split into two groups:
//! - **Authoritative**: `id` and `name`, fixed for the life of a session.
//! - **Derived**: the [`Standing`] (per-round scores, total, knockout flag),
//!   written only by the scoring engine's recompute path.
//!
//! Both groups are persisted side by side so a snapshot can be rehydrated
//! without recomputation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Score;

/// Opaque, stable player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-round score column for one player.
///
/// Inline capacity covers a typical game; longer games spill to the heap.
pub type ScoreColumn = SmallVec<[Score; 16]>;

/// Derived scoring fields for a player.
///
/// Only the scoring engine constructs non-empty standings, so these fields
/// always agree with the round history they were computed from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    scores: ScoreColumn,
    total_score: Score,
    is_knocked_out: bool,
}

impl Standing {
    pub(crate) fn new(scores: ScoreColumn, total_score: Score, is_knocked_out: bool) -> Self {
        Self {
            scores,
            total_score,
            is_knocked_out,
        }
    }

    /// Scores per round, index-aligned with the round history.
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Sum of all round scores.
    #[must_use]
    pub fn total_score(&self) -> Score {
        self.total_score
    }

    /// Whether the total has crossed the configured limit.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.is_knocked_out
    }
}

/// A player in a game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    #[serde(flatten)]
    standing: Standing,
}

impl Player {
    /// Create a player with an empty standing.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            standing: Standing::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived scoring fields.
    #[must_use]
    pub fn standing(&self) -> &Standing {
        &self.standing
    }

    #[must_use]
    pub fn scores(&self) -> &[Score] {
        self.standing.scores()
    }

    #[must_use]
    pub fn total_score(&self) -> Score {
        self.standing.total_score()
    }

    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.standing.is_knocked_out()
    }

    /// Same identity, different standing.
    pub(crate) fn with_standing(&self, standing: Standing) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            standing,
        }
    }
}
