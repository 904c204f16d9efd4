//! Core types: players, rounds, configuration, sessions, identifiers.
//!
//! These are the building blocks shared by the scoring engine, the session
//! store and persistence.

pub mod player;
pub mod round;
pub mod config;
pub mod session;
pub mod ids;

/// A single score or total. Signed so arbitrary integers round-trip.
pub type Score = i64;

pub use player::{Player, PlayerId, ScoreColumn, Standing};
pub use round::RoundRecord;
pub use config::{
    ConfigError, GameConfig, DEFAULT_DROP_SCORE, DEFAULT_MIDDLE_DROP_SCORE,
    DEFAULT_TOTAL_SCORE_LIMIT,
};
pub use session::GameSession;
pub use ids::{IdGenerator, SeededIdGenerator, UuidIdGenerator};
