//! # rummy-scorer
//!
//! Score tracking for multiplayer rummy-style card games.
//!
//! Players collect a score every round; a player whose running total goes
//! past the configured limit is knocked out.
//!
//! ## Design Principles
//!
//! 1. **Derived, never hand-set**: per-round columns, totals and knockout
//!    flags are recomputed from the round history after every change.
//!
//! 2. **Snapshots, not mutation**: every command publishes a new
//!    `GameSession`. Old snapshots stay valid.
//!
//! 3. **No hidden globals**: the `SessionStore` is a plain value owned by the
//!    application and handed to whatever needs it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` vectors and maps make a session
//!   clone O(1), so snapshots are cheap to keep.
//!
//! - **Best-effort persistence**: the store writes a JSON snapshot after
//!   each command. Failures are logged; the in-memory session wins.
//!
//! ## Modules
//!
//! - `core`: Player ids, players, round records, config, sessions, id generation
//! - `scoring`: Pure total and knockout computation
//! - `store`: The session store and its commands
//! - `persistence`: Snapshot slots and JSON load/save
//! - `entry`: Input sanitizing for round entry, round edits and game setup

pub mod core;
pub mod scoring;
pub mod store;
pub mod persistence;
pub mod entry;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameSession, IdGenerator, Player, PlayerId, RoundRecord, Score,
    SeededIdGenerator, Standing, UuidIdGenerator,
};

pub use crate::scoring::{is_knocked_out, recompute_totals};

pub use crate::store::{SessionStore, StoreError};

pub use crate::persistence::{
    FileSlot, MemorySlot, PersistError, SnapshotSlot, DEFAULT_STORAGE_KEY,
};

pub use crate::entry::{GameSetup, RoundEdit, RoundEntry, ScorePreset, SetupError};
