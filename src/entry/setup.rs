//! Game setup form.
//!
//! Collects the roster and config before `start_game`. The player count is
//! clamped to 2-8 and the name list follows it, filling new seats with
//! `"Player N"`. Config values are entered as text and coerced.

use thiserror::Error;

use super::input::{coerce_score, sanitize_digits};
use crate::core::{ConfigError, GameConfig};

/// Smallest table.
pub const PLAYER_MIN: usize = 2;

/// Largest table.
pub const PLAYER_MAX: usize = 8;

/// Why a setup cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("need at least {} players, got {0}", PLAYER_MIN)]
    TooFewPlayers(usize),

    #[error("at most {} players allowed, got {0}", PLAYER_MAX)]
    TooManyPlayers(usize),

    #[error("player {} has a blank name", .0 + 1)]
    BlankName(usize),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// The setup form state.
#[derive(Clone, Debug)]
pub struct GameSetup {
    player_count_text: String,
    player_names: Vec<String>,
    config: GameConfig,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            player_count_text: PLAYER_MIN.to_string(),
            player_names: default_names(PLAYER_MIN),
            config: GameConfig::default(),
        }
    }
}

impl GameSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the roster, e.g. from the previous game's players.
    ///
    /// The list is taken as given; `validate` reports a count outside 2-8.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let player_names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            player_count_text: player_names.len().to_string(),
            player_names,
            config: GameConfig::default(),
        }
    }

    /// Replace the config (builder style).
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Raw player-count field (digits only).
    #[must_use]
    pub fn player_count_text(&self) -> &str {
        &self.player_count_text
    }

    /// Effective player count: the field clamped to 2-8, or 2 if empty.
    #[must_use]
    pub fn player_count(&self) -> usize {
        clamp_count(&self.player_count_text)
    }

    /// Update the player-count field and resize the name list to the
    /// effective count.
    ///
    /// Existing names are kept; new seats get `"Player N"`.
    pub fn set_player_count_text(&mut self, text: &str) {
        self.player_count_text = sanitize_digits(text);

        let count = clamp_count(&self.player_count_text);
        while self.player_names.len() < count {
            let seat = self.player_names.len() + 1;
            self.player_names.push(format!("Player {seat}"));
        }
        self.player_names.truncate(count);
    }

    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Rename seat `index`. Out-of-range indices are ignored.
    pub fn set_player_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(slot) = self.player_names.get_mut(index) {
            *slot = name.into();
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_total_score_limit_text(&mut self, text: &str) {
        self.config.total_score_limit = coerce_score(text);
    }

    pub fn set_drop_score_text(&mut self, text: &str) {
        self.config.drop_score = coerce_score(text);
    }

    pub fn set_middle_drop_score_text(&mut self, text: &str) {
        self.config.middle_drop_score = coerce_score(text);
    }

    /// Whether the form is ready to start a game.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the roster and config.
    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.player_names.len();
        if count < PLAYER_MIN {
            return Err(SetupError::TooFewPlayers(count));
        }
        if count > PLAYER_MAX {
            return Err(SetupError::TooManyPlayers(count));
        }
        if let Some(index) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(SetupError::BlankName(index));
        }
        self.config.validate()?;
        Ok(())
    }

    /// The names and config to pass to `start_game`.
    pub fn finish(self) -> Result<(Vec<String>, GameConfig), SetupError> {
        self.validate()?;
        Ok((self.player_names, self.config))
    }
}

fn clamp_count(text: &str) -> usize {
    text.parse::<usize>()
        .map_or(PLAYER_MIN, |n| n.clamp(PLAYER_MIN, PLAYER_MAX))
}

fn default_names(count: usize) -> Vec<String> {
    (1..=count).map(|seat| format!("Player {seat}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup() {
        let setup = GameSetup::new();

        assert_eq!(setup.player_count(), 2);
        assert_eq!(setup.player_names(), &["Player 1", "Player 2"]);
        assert_eq!(*setup.config(), GameConfig::default());
        assert!(setup.can_start());
    }

    #[test]
    fn test_player_count_clamped() {
        let mut setup = GameSetup::new();

        setup.set_player_count_text("12");
        assert_eq!(setup.player_count(), 8);
        assert_eq!(setup.player_names().len(), 8);
        assert_eq!(setup.player_names()[7], "Player 8");

        setup.set_player_count_text("1");
        assert_eq!(setup.player_count(), 2);
        assert_eq!(setup.player_names().len(), 2);
    }

    #[test]
    fn test_empty_count_falls_back_to_minimum() {
        let mut setup = GameSetup::new();
        setup.set_player_count_text("4");
        setup.set_player_count_text("x");

        assert_eq!(setup.player_count_text(), "");
        assert_eq!(setup.player_count(), 2);
        assert_eq!(setup.player_names().len(), 2);
    }

    #[test]
    fn test_resize_keeps_existing_names() {
        let mut setup = GameSetup::new();
        setup.set_player_name(0, "Alice");
        setup.set_player_count_text("3");

        assert_eq!(setup.player_names(), &["Alice", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_from_names_checks_range() {
        let setup = GameSetup::from_names(["Solo"]);
        assert_eq!(setup.validate(), Err(SetupError::TooFewPlayers(1)));

        let crowd: Vec<String> = (1..=9).map(|i| format!("P{i}")).collect();
        let setup = GameSetup::from_names(crowd);
        assert_eq!(setup.validate(), Err(SetupError::TooManyPlayers(9)));

        let setup =
            GameSetup::from_names(["Alice", "Bob", "Cara"]).with_config(GameConfig::new(101));
        assert_eq!(setup.player_count(), 3);
        let (names, config) = setup.finish().unwrap();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
        assert_eq!(config.total_score_limit, 101);
    }

    #[test]
    fn test_blank_name_blocks_start() {
        let mut setup = GameSetup::new();
        setup.set_player_name(1, "   ");

        assert_eq!(setup.validate(), Err(SetupError::BlankName(1)));
        assert!(!setup.can_start());
    }

    #[test]
    fn test_config_text_fields() {
        let mut setup = GameSetup::new();
        setup.set_total_score_limit_text("101");
        setup.set_drop_score_text("20");
        setup.set_middle_drop_score_text("abc");

        let (names, config) = setup.finish().unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(config.total_score_limit, 101);
        assert_eq!(config.drop_score, 20);
        assert_eq!(config.middle_drop_score, 0);
    }

    #[test]
    fn test_zero_limit_blocks_start() {
        let mut setup = GameSetup::new();
        setup.set_total_score_limit_text("");

        assert_eq!(
            setup.finish().unwrap_err(),
            SetupError::InvalidConfig(ConfigError::NonPositiveLimit(0))
        );
    }
}
