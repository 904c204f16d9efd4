//! The session store: the single owner of the live game session.
//!
//! Every command builds the next [`GameSession`] from the current one and
//! swaps it in with one assignment, so no caller can see a half-applied
//! change. After each successful command the snapshot is written to the
//! store's [`SnapshotSlot`]; write failures are logged and otherwise ignored.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start_game--> Started --reset_game--> Started (history cleared)
//!      ^                                                   |
//!      +---------------------- new_game -------------------+
//! ```
//!
//! ## Example
//!
//! ```
//! use rummy_scorer::core::{GameConfig, RoundRecord};
//! use rummy_scorer::store::SessionStore;
//!
//! let mut store = SessionStore::in_memory();
//! store.start_game(["Alice", "Bob"], GameConfig::new(201)).unwrap();
//!
//! let ids: Vec<_> = store.session().players().iter().map(|p| p.id().clone()).collect();
//! let round = RoundRecord::new()
//!     .with_score(ids[0].clone(), 30)
//!     .with_score(ids[1].clone(), 45);
//! store.add_round(round).unwrap();
//!
//! assert_eq!(store.session().players()[1].total_score(), 45);
//! ```

use im::Vector;
use tracing::{debug, info, warn};

use super::StoreError;
use crate::core::{GameConfig, GameSession, IdGenerator, Player, RoundRecord, UuidIdGenerator};
use crate::persistence::{self, MemorySlot, SnapshotSlot, DEFAULT_STORAGE_KEY};

/// Owner of the live session.
pub struct SessionStore<S = MemorySlot, G = UuidIdGenerator> {
    session: GameSession,
    slot: S,
    storage_key: String,
    ids: G,
}

impl SessionStore {
    /// Store backed by an empty in-memory slot, with random UUID player ids.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(MemorySlot::new(), UuidIdGenerator)
    }
}

impl<S: SnapshotSlot, G: IdGenerator> SessionStore<S, G> {
    /// Hydrate from `slot` under the default key.
    pub fn open(slot: S, ids: G) -> Self {
        Self::open_with_key(slot, ids, DEFAULT_STORAGE_KEY)
    }

    /// Hydrate from `slot` under `storage_key`.
    ///
    /// A missing or malformed snapshot yields the default session.
    pub fn open_with_key(slot: S, ids: G, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let session = persistence::load_session(&slot, &storage_key);
        Self {
            session,
            slot,
            storage_key,
            ids,
        }
    }

    // === Accessors ===

    /// The current snapshot.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// An owned copy of the current snapshot. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameSession {
        self.session.clone()
    }

    /// The persistence slot.
    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // === Commands ===

    /// Begin a game with the given roster and config.
    ///
    /// Names are trimmed and blank names dropped; each survivor gets a fresh
    /// id. The 2-8 player range is the caller's to enforce: fewer names
    /// still start a (degenerate) game.
    pub fn start_game<I>(&mut self, player_names: I, config: GameConfig) -> Result<(), StoreError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.session.is_started() {
            return Err(StoreError::AlreadyStarted);
        }
        config.validate()?;

        let players: Vector<Player> = player_names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref().trim();
                (!name.is_empty()).then(|| name.to_string())
            })
            .map(|name| Player::new(self.ids.next_id(), name))
            .collect();

        info!(
            players = players.len(),
            limit = config.total_score_limit,
            "starting game"
        );
        self.commit(GameSession::started(players, config));
        Ok(())
    }

    /// Append a round and re-derive standings.
    ///
    /// Knocked-out players are expected to carry 0 (or be absent); the
    /// record is stored as given.
    pub fn add_round(&mut self, scores_by_player: RoundRecord) -> Result<(), StoreError> {
        self.require_started()?;

        let mut history = self.session.round_history().clone();
        history.push_back(scores_by_player);

        debug!(round = history.len(), "adding round");
        let next = self.session.with_history(history);
        self.commit(next);
        Ok(())
    }

    /// Merge `patch` into round `round_index` and re-derive standings.
    ///
    /// Entries for players not in the patch are kept.
    pub fn update_round_scores(
        &mut self,
        round_index: usize,
        patch: RoundRecord,
    ) -> Result<(), StoreError> {
        self.require_started()?;
        let existing = self.round_at(round_index)?;

        let mut history = self.session.round_history().clone();
        history.set(round_index, existing.merged(&patch));

        debug!(round_index, entries = patch.len(), "updating round");
        let next = self.session.with_history(history);
        self.commit(next);
        Ok(())
    }

    /// Remove round `round_index`; later rounds shift down by one.
    pub fn delete_round(&mut self, round_index: usize) -> Result<(), StoreError> {
        self.require_started()?;
        self.round_at(round_index)?;

        let mut history = self.session.round_history().clone();
        history.remove(round_index);

        debug!(round_index, remaining = history.len(), "deleting round");
        let next = self.session.with_history(history);
        self.commit(next);
        Ok(())
    }

    /// Clear the history but keep the roster and config.
    pub fn reset_game(&mut self) {
        info!(players = self.session.players().len(), "resetting game");
        let next = self.session.with_history(Vector::new());
        self.commit(next);
    }

    /// Discard everything and return to the default, not-started session.
    pub fn new_game(&mut self) {
        info!("new game");
        self.commit(GameSession::default());
    }

    // === Internals ===

    fn require_started(&self) -> Result<(), StoreError> {
        if self.session.is_started() {
            Ok(())
        } else {
            Err(StoreError::NotStarted)
        }
    }

    fn round_at(&self, round_index: usize) -> Result<RoundRecord, StoreError> {
        self.session
            .round(round_index)
            .cloned()
            .ok_or(StoreError::RoundOutOfRange {
                index: round_index,
                round_count: self.session.round_count(),
            })
    }

    /// Swap in `next` and persist it.
    fn commit(&mut self, next: GameSession) {
        self.session = next;
        if let Err(error) =
            persistence::save_session(&mut self.slot, &self.storage_key, &self.session)
        {
            warn!(key = %self.storage_key, %error, "failed to save session");
        }
    }
}
