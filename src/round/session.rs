//! Game session
//!
//! Coordinates a word pool, round settings, the random source and the score
//! ledger. Surfaces drive rounds through a session instead of global state.

use super::config::RoundConfig;
use super::outcome::Outcome;
use super::state::{Round, Status};
use crate::core::{Difficulty, Word};
use crate::ledger::{LedgerError, RecordOutcome, ScoreLedger};
use crate::wordlists::{WordSourceError, draw_secret};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Results across the rounds of one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub new_bests: usize,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// A run of rounds sharing configuration, randomness and ledger
pub struct Session<R: Rng> {
    words: Vec<Word>,
    config: RoundConfig,
    ledger: ScoreLedger,
    rng: R,
    stats: Statistics,
}

impl<R: Rng> Session<R> {
    /// Create a session
    ///
    /// # Errors
    ///
    /// Returns `NoValidWords` if `words` is empty.
    pub fn new(
        words: Vec<Word>,
        config: RoundConfig,
        ledger: ScoreLedger,
        rng: R,
    ) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::NoValidWords);
        }

        Ok(Self {
            words,
            config,
            ledger,
            rng,
            stats: Statistics::default(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub const fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub const fn set_time_limit(&mut self, time_limit: Option<Duration>) {
        self.config.time_limit = time_limit;
    }

    #[must_use]
    pub const fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Draw a fresh secret for the current difficulty and start a round
    ///
    /// # Errors
    ///
    /// Returns `NoValidWords` if the pool is empty, which `new` rules out.
    pub fn new_round(&mut self) -> Result<Round, WordSourceError> {
        let secret = draw_secret(&self.words, self.config.difficulty, &mut self.rng)
            .ok_or(WordSourceError::NoValidWords)?
            .clone();

        debug!(
            len = secret.len(),
            difficulty = %self.config.difficulty,
            "new round"
        );
        Ok(Round::new(secret, &self.config))
    }

    /// Apply a hint to `round` using the session's random source
    pub fn hint(&mut self, round: &mut Round) -> Outcome {
        round.apply_hint(&mut self.rng)
    }

    /// Best attempts on record
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` if the ledger file cannot be read.
    pub fn best_attempts(&self) -> Result<Option<u32>, LedgerError> {
        self.ledger.best_attempts()
    }

    /// Book a finished round
    ///
    /// Updates statistics and, for a win, offers the attempts to the ledger.
    /// Returns `None` for lost or unfinished rounds. Call once per round.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` if the ledger cannot be read or appended to.
    pub fn settle(&mut self, round: &Round) -> Result<Option<RecordOutcome>, LedgerError> {
        match round.status() {
            Status::InProgress => Ok(None),
            Status::Lost => {
                self.stats.rounds_played += 1;
                Ok(None)
            }
            Status::Won => {
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;

                let outcome = self
                    .ledger
                    .record_if_best(round.secret().text(), round.attempts())?;
                if outcome.is_new_best() {
                    self.stats.new_bests += 1;
                }
                Ok(Some(outcome))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn session(words: &[&str], difficulty: Difficulty) -> (TempDir, Session<StdRng>) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("best_scores"));
        let session = Session::new(
            words_from_slice(words),
            RoundConfig::new(difficulty),
            ledger,
            StdRng::seed_from_u64(99),
        )
        .unwrap();
        (dir, session)
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = Session::new(
            Vec::new(),
            RoundConfig::default(),
            ScoreLedger::default(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(WordSourceError::NoValidWords)));
    }

    #[test]
    fn new_round_uses_difficulty_pool() {
        let (_dir, mut session) = session(&["cat", "elephant"], Difficulty::Hard);
        for _ in 0..5 {
            assert_eq!(session.new_round().unwrap().secret().text(), "elephant");
        }

        session.set_difficulty(Difficulty::Easy);
        assert_eq!(session.new_round().unwrap().secret().text(), "cat");
    }

    #[test]
    fn new_round_takes_config_limits() {
        let (_dir, mut session) = session(&["cat"], Difficulty::Medium);
        session.set_time_limit(Some(Duration::from_secs(30)));
        let round = session.new_round().unwrap();
        assert_eq!(round.max_penalty(), 12);
        assert_eq!(session.config().time_limit, Some(Duration::from_secs(30)));
    }

    #[test]
    fn same_seed_same_rounds() {
        let words = ["apple", "banana", "cherry", "mouse", "keyboard"];
        let (_a, mut first) = session(&words, Difficulty::Medium);
        let (_b, mut second) = session(&words, Difficulty::Medium);

        for _ in 0..10 {
            let mut x = first.new_round().unwrap();
            let mut y = second.new_round().unwrap();
            assert_eq!(x.secret(), y.secret());
            assert_eq!(first.hint(&mut x), second.hint(&mut y));
        }
    }

    #[test]
    fn settle_win_records_best_once() {
        let (_dir, mut session) = session(&["cat"], Difficulty::Medium);

        let mut round = session.new_round().unwrap();
        round.submit_guess("cat");
        assert_eq!(
            session.settle(&round).unwrap(),
            Some(RecordOutcome::NewBest { previous: None })
        );

        let mut round = session.new_round().unwrap();
        round.submit_guess("a");
        round.submit_guess("cat");
        assert_eq!(
            session.settle(&round).unwrap(),
            Some(RecordOutcome::NoImprovement { best: 1 })
        );

        assert_eq!(session.best_attempts().unwrap(), Some(1));
        assert_eq!(session.stats().rounds_won, 2);
        assert_eq!(session.stats().new_bests, 1);
    }

    #[test]
    fn settle_loss_writes_nothing() {
        let (_dir, mut session) = session(&["cat"], Difficulty::Medium);

        let mut round = session.new_round().unwrap();
        round.force_loss();
        assert_eq!(session.settle(&round).unwrap(), None);
        assert_eq!(session.best_attempts().unwrap(), None);
        assert!(!session.ledger().path().exists());

        let stats = session.stats();
        assert_eq!((stats.rounds_played, stats.rounds_won), (1, 0));
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn settle_in_progress_is_noop() {
        let (_dir, mut session) = session(&["cat"], Difficulty::Medium);
        let round = session.new_round().unwrap();
        assert_eq!(session.settle(&round).unwrap(), None);
        assert_eq!(session.stats().rounds_played, 0);
    }
}
