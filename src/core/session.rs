//! Game session: the complete, serializable state of one game.
//!
//! ## GameSession
//!
//! - Player roster (display order, fixed once started)
//! - Round history (position = round number, 0-based)
//! - Configuration
//! - Lifecycle flag
//!
//! Players and history live in `im` vectors, so cloning a session is O(1)
//! and every published snapshot stays valid after later commands.
//!
//! Sessions are only built by the session store and by deserialization.
//! The JSON form is the persisted snapshot format.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, PlayerId};
use super::round::RoundRecord;
use super::Score;
use crate::scoring;

/// Snapshot of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    players: Vector<Player>,
    round_history: Vector<RoundRecord>,
    config: GameConfig,
    #[serde(alias = "rounds")]
    round_count: usize,
    is_started: bool,
}

impl GameSession {
    /// A freshly started session with the given roster and no rounds.
    pub(crate) fn started(players: Vector<Player>, config: GameConfig) -> Self {
        Self {
            players,
            round_history: Vector::new(),
            config,
            round_count: 0,
            is_started: true,
        }
    }

    /// Same roster and config with a new history; standings re-derived.
    pub(crate) fn with_history(&self, round_history: Vector<RoundRecord>) -> Self {
        let players = scoring::recompute_totals(
            &self.players,
            &round_history,
            self.config.total_score_limit,
        );
        Self {
            players,
            round_count: round_history.len(),
            round_history,
            config: self.config,
            is_started: self.is_started,
        }
    }

    // === Accessors ===

    /// Players in display order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Rounds in play order.
    #[must_use]
    pub fn round_history(&self) -> &Vector<RoundRecord> {
        &self.round_history
    }

    /// A single round by 0-based index.
    #[must_use]
    pub fn round(&self, index: usize) -> Option<&RoundRecord> {
        self.round_history.get(index)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of rounds played. Always equals the history length.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.is_started
    }

    // === Derived Views ===

    /// Highest total among players, floored at 0.
    #[must_use]
    pub fn highest_score(&self) -> Score {
        scoring::highest_score(&self.players)
    }

    /// Players still in the game.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        scoring::active_players(&self.players)
    }

    /// Whether every derived field matches the round history.
    ///
    /// Deserialized snapshots are trusted for their derived fields; this
    /// lets a loader detect a snapshot that was edited or written by an
    /// incompatible build.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.round_count == self.round_history.len()
            && scoring::recompute_totals(
                &self.players,
                &self.round_history,
                self.config.total_score_limit,
            ) == self.players
    }

    /// Re-derive `round_count` and every standing from the history.
    #[must_use]
    pub fn rederived(&self) -> Self {
        self.with_history(self.round_history.clone())
    }
}
