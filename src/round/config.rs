//! Round configuration and scoring constants

use crate::core::Difficulty;
use std::time::Duration;

/// Penalty at which a round is lost
pub const DEFAULT_MAX_PENALTY: u32 = 12;

/// Penalty for a letter that is not in the secret
pub const WRONG_LETTER_PENALTY: u32 = 1;

/// Penalty for a wrong whole-word guess
pub const WRONG_WORD_PENALTY: u32 = 5;

/// Attempts charged for a hint
pub const HINT_SURCHARGE: u32 = 2;

/// Time budget used when the timer is switched on without a value
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_mins(1);

/// Settings shared by every round of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub max_penalty: u32,
    pub difficulty: Difficulty,
    /// Wall-clock budget enforced by the caller, if any
    pub time_limit: Option<Duration>,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            max_penalty: DEFAULT_MAX_PENALTY,
            difficulty,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_max_penalty(mut self, max_penalty: u32) -> Self {
        self.max_penalty = max_penalty;
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.max_penalty, 12);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn builders_override() {
        let config = RoundConfig::new(Difficulty::Hard)
            .with_max_penalty(6)
            .with_time_limit(Some(DEFAULT_TIME_LIMIT));
        assert_eq!(config.max_penalty, 6);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.time_limit, Some(Duration::from_mins(1)));
    }
}
