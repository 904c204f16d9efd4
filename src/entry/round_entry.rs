//! Drafting the scores for a new round.
//!
//! Every player starts at `"0"`. Knocked-out players cannot be edited and
//! always submit 0, so each submitted record covers the full roster.

use rustc_hash::FxHashMap;

use super::input::{coerce_score, sanitize_digits};
use crate::core::{GameConfig, GameSession, PlayerId, RoundRecord, Score};

/// Quick-fill values taken from the game config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScorePreset {
    /// Dropped before drawing.
    Drop,
    /// Dropped mid-hand.
    MiddleDrop,
}

impl ScorePreset {
    /// The score this preset writes.
    #[must_use]
    pub fn score(self, config: &GameConfig) -> Score {
        match self {
            ScorePreset::Drop => config.drop_score,
            ScorePreset::MiddleDrop => config.middle_drop_score,
        }
    }
}

#[derive(Clone, Debug)]
struct Seat {
    id: PlayerId,
    knocked_out: bool,
}

/// Draft scores for the next round.
#[derive(Clone, Debug)]
pub struct RoundEntry {
    seats: Vec<Seat>,
    config: GameConfig,
    drafts: FxHashMap<PlayerId, String>,
}

impl RoundEntry {
    /// Fresh draft for the session's current roster.
    #[must_use]
    pub fn for_session(session: &GameSession) -> Self {
        let seats: Vec<Seat> = session
            .players()
            .iter()
            .map(|p| Seat {
                id: p.id().clone(),
                knocked_out: p.is_knocked_out(),
            })
            .collect();
        let mut entry = Self {
            seats,
            config: *session.config(),
            drafts: FxHashMap::default(),
        };
        entry.clear();
        entry
    }

    /// Draft text for a player. Empty for unknown players.
    #[must_use]
    pub fn entry(&self, player: &PlayerId) -> &str {
        self.drafts.get(player).map_or("", String::as_str)
    }

    /// Whether a player's draft can be edited.
    #[must_use]
    pub fn is_editable(&self, player: &PlayerId) -> bool {
        self.seat(player).is_some_and(|s| !s.knocked_out)
    }

    /// Replace a player's draft; non-digits are stripped.
    ///
    /// Returns `false` (and changes nothing) for knocked-out or unknown
    /// players.
    pub fn set_entry(&mut self, player: &PlayerId, text: &str) -> bool {
        if !self.is_editable(player) {
            return false;
        }
        self.drafts.insert(player.clone(), sanitize_digits(text));
        true
    }

    /// Fill a player's draft from a config preset.
    pub fn apply_preset(&mut self, player: &PlayerId, preset: ScorePreset) -> bool {
        let score = preset.score(&self.config);
        self.set_entry(player, &score.to_string())
    }

    /// A round can be submitted while anyone is still playing.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.seats.iter().any(|s| !s.knocked_out)
    }

    /// Build the round record and reset all drafts to `"0"`.
    ///
    /// Knocked-out players are recorded as 0 whatever their draft says.
    pub fn submit(&mut self) -> RoundRecord {
        let record = self
            .seats
            .iter()
            .map(|seat| {
                let score = if seat.knocked_out {
                    0
                } else {
                    coerce_score(self.entry(&seat.id))
                };
                (seat.id.clone(), score)
            })
            .collect();
        self.clear();
        record
    }

    fn seat(&self, player: &PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|s| &s.id == player)
    }

    fn clear(&mut self) {
        self.drafts = self
            .seats
            .iter()
            .map(|s| (s.id.clone(), "0".to_string()))
            .collect();
    }
}
