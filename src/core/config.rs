//! Game configuration.
//!
//! Three thresholds drive a game:
//! - `total_score_limit`: a player whose total exceeds this is knocked out
//! - `drop_score`: points charged for dropping before the first draw
//! - `middle_drop_score`: points charged for dropping mid-hand
//!
//! The config is fixed once a game starts. Only the limit affects scoring;
//! the drop values are presets offered at round entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Score;

/// Default knockout limit.
pub const DEFAULT_TOTAL_SCORE_LIMIT: Score = 201;

/// Default drop preset.
pub const DEFAULT_DROP_SCORE: Score = 25;

/// Default middle-drop preset.
pub const DEFAULT_MIDDLE_DROP_SCORE: Score = 40;

/// Reasons a config is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("total score limit must be positive, got {0}")]
    NonPositiveLimit(Score),

    #[error("drop score must not be negative, got {0}")]
    NegativeDropScore(Score),

    #[error("middle drop score must not be negative, got {0}")]
    NegativeMiddleDropScore(Score),
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Totals strictly above this knock a player out.
    pub total_score_limit: Score,

    /// Preset for an initial drop.
    pub drop_score: Score,

    /// Preset for a middle drop.
    pub middle_drop_score: Score,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_score_limit: DEFAULT_TOTAL_SCORE_LIMIT,
            drop_score: DEFAULT_DROP_SCORE,
            middle_drop_score: DEFAULT_MIDDLE_DROP_SCORE,
        }
    }
}

impl GameConfig {
    /// Create a config with the given limit and default drop presets.
    #[must_use]
    pub fn new(total_score_limit: Score) -> Self {
        Self {
            total_score_limit,
            ..Self::default()
        }
    }

    /// Set the knockout limit.
    #[must_use]
    pub fn with_total_score_limit(mut self, limit: Score) -> Self {
        self.total_score_limit = limit;
        self
    }

    /// Set the drop preset.
    #[must_use]
    pub fn with_drop_score(mut self, score: Score) -> Self {
        self.drop_score = score;
        self
    }

    /// Set the middle-drop preset.
    #[must_use]
    pub fn with_middle_drop_score(mut self, score: Score) -> Self {
        self.middle_drop_score = score;
        self
    }

    /// Check the positive limit and non-negative presets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_score_limit <= 0 {
            return Err(ConfigError::NonPositiveLimit(self.total_score_limit));
        }
        if self.drop_score < 0 {
            return Err(ConfigError::NegativeDropScore(self.drop_score));
        }
        if self.middle_drop_score < 0 {
            return Err(ConfigError::NegativeMiddleDropScore(self.middle_drop_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.total_score_limit, 201);
        assert_eq!(config.drop_score, 25);
        assert_eq!(config.middle_drop_score, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(101)
            .with_drop_score(20)
            .with_middle_drop_score(30);

        assert_eq!(config.total_score_limit, 101);
        assert_eq!(config.drop_score, 20);
        assert_eq!(config.middle_drop_score, 30);

        let config = config.with_total_score_limit(250);
        assert_eq!(config.total_score_limit, 250);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            GameConfig::new(0).validate(),
            Err(ConfigError::NonPositiveLimit(0))
        );
        assert_eq!(
            GameConfig::default().with_drop_score(-1).validate(),
            Err(ConfigError::NegativeDropScore(-1))
        );
        assert_eq!(
            GameConfig::default().with_middle_drop_score(-5).validate(),
            Err(ConfigError::NegativeMiddleDropScore(-5))
        );
    }

    #[test]
    fn test_zero_drop_scores_are_valid() {
        let config = GameConfig::new(1).with_drop_score(0).with_middle_drop_score(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(json["totalScoreLimit"], 201);
        assert_eq!(json["dropScore"], 25);
        assert_eq!(json["middleDropScore"], 40);
    }
}
