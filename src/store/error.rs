use thiserror::Error;

use crate::core::ConfigError;

/// Reasons the session store rejects a command.
///
/// A rejected command leaves the session untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Round commands need a started game.
    #[error("game has not been started")]
    NotStarted,

    /// `start_game` on a running game. Use `new_game` or `reset_game`.
    #[error("game already started")]
    AlreadyStarted,

    #[error("round index {index} out of range ({round_count} rounds recorded)")]
    RoundOutOfRange { index: usize, round_count: usize },

    #[error("invalid game config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
