//! Input helpers for the presentation layer.
//!
//! These sit on the caller's side of the store boundary and turn raw form
//! input into well-typed commands:
//! - `input`: digit filtering and score coercion
//! - `round_entry`: drafting a new round, with drop presets
//! - `round_edit`: drafting changes to a recorded round
//! - `setup`: roster and config collection before `start_game`

pub mod input;
pub mod round_entry;
pub mod round_edit;
pub mod setup;

pub use input::{coerce_score, sanitize_digits};
pub use round_entry::{RoundEntry, ScorePreset};
pub use round_edit::RoundEdit;
pub use setup::{GameSetup, SetupError, PLAYER_MAX, PLAYER_MIN};
