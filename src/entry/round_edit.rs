//! Editing a recorded round.
//!
//! Drafts are prefilled from the round (absent players show `"0"`) and
//! finish into a patch for [`SessionStore::update_round_scores`].
//!
//! [`SessionStore::update_round_scores`]: crate::store::SessionStore::update_round_scores

use rustc_hash::FxHashMap;

use super::input::{coerce_score, sanitize_digits};
use crate::core::{GameSession, PlayerId, RoundRecord};
use crate::store::StoreError;

/// Draft edits for one round.
#[derive(Clone, Debug)]
pub struct RoundEdit {
    round_index: usize,
    order: Vec<PlayerId>,
    drafts: FxHashMap<PlayerId, String>,
}

impl RoundEdit {
    /// Start editing round `round_index` of `session`.
    pub fn begin(session: &GameSession, round_index: usize) -> Result<Self, StoreError> {
        let round = session
            .round(round_index)
            .ok_or(StoreError::RoundOutOfRange {
                index: round_index,
                round_count: session.round_count(),
            })?;

        let order: Vec<PlayerId> = session.players().iter().map(|p| p.id().clone()).collect();
        let drafts = order
            .iter()
            .map(|id| (id.clone(), round.score_for(id).to_string()))
            .collect();

        Ok(Self {
            round_index,
            order,
            drafts,
        })
    }

    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Draft text for a player. Empty for unknown players.
    #[must_use]
    pub fn entry(&self, player: &PlayerId) -> &str {
        self.drafts.get(player).map_or("", String::as_str)
    }

    /// Replace a player's draft; non-digits are stripped.
    pub fn set_entry(&mut self, player: &PlayerId, text: &str) -> bool {
        match self.drafts.get_mut(player) {
            Some(draft) => {
                *draft = sanitize_digits(text);
                true
            }
            None => false,
        }
    }

    /// The round index and a patch holding every player's coerced draft.
    #[must_use]
    pub fn finish(self) -> (usize, RoundRecord) {
        let patch = self
            .order
            .iter()
            .map(|id| (id.clone(), coerce_score(self.entry(id))))
            .collect();
        (self.round_index, patch)
    }
}
