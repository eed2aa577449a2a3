//! Round state
//!
//! A `Round` is one play-through of a single secret. Fields are only mutated
//! by the transition functions in `engine`.

use super::config::RoundConfig;
use super::engine;
use super::outcome::Outcome;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Placeholder shown for an unrevealed position
pub const PLACEHOLDER: char = '_';

/// Round status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// State of one guessing round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) secret: Word,
    pub(super) revealed: Vec<Option<u8>>,
    pub(super) used_letters: FxHashSet<u8>,
    pub(super) penalty: u32,
    pub(super) max_penalty: u32,
    pub(super) attempts: u32,
    pub(super) status: Status,
}

impl Round {
    /// Start a round for `secret` with the limits from `config`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    /// use hangman::round::{Round, RoundConfig, Status};
    ///
    /// let mut round = Round::new(Word::new("cat").unwrap(), &RoundConfig::default());
    /// round.submit_guess("a");
    /// assert_eq!(round.masked(), "_ a _");
    /// round.submit_guess("cat");
    /// assert_eq!(round.status(), Status::Won);
    /// ```
    #[must_use]
    pub fn new(secret: Word, config: &RoundConfig) -> Self {
        Self::with_max_penalty(secret, config.max_penalty)
    }

    /// Start a round with an explicit failure threshold
    #[must_use]
    pub fn with_max_penalty(secret: Word, max_penalty: u32) -> Self {
        let revealed = vec![None; secret.len()];
        Self {
            secret,
            revealed,
            used_letters: FxHashSet::default(),
            penalty: 0,
            max_penalty,
            attempts: 0,
            status: Status::InProgress,
        }
    }

    /// Submit a raw letter or word guess
    pub fn submit_guess(&mut self, raw: &str) -> Outcome {
        let (next, outcome) = engine::resolve_guess(self, raw);
        *self = next;
        outcome
    }

    /// Reveal a random unrevealed letter for a fixed attempt surcharge
    pub fn apply_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let (next, outcome) = engine::resolve_hint(self, rng);
        *self = next;
        outcome
    }

    /// End the round as lost because the caller's time budget ran out
    pub fn force_loss(&mut self) -> Outcome {
        let (next, outcome) = engine::resolve_timeout(self);
        *self = next;
        outcome
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Revealed letters by position, `None` for hidden ones
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<u8>] {
        &self.revealed
    }

    /// The word as shown to the player, e.g. `"_ a _"`
    #[must_use]
    pub fn masked(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, char::from).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Letters already tried, sorted
    #[must_use]
    pub fn used_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.used_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[inline]
    #[must_use]
    pub fn has_used(&self, letter: u8) -> bool {
        self.used_letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn penalty(&self) -> u32 {
        self.penalty
    }

    #[inline]
    #[must_use]
    pub const fn max_penalty(&self) -> u32 {
        self.max_penalty
    }

    /// Penalty left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_lives(&self) -> u32 {
        self.max_penalty.saturating_sub(self.penalty)
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Every position is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// Positions still hidden
    #[must_use]
    pub fn unrevealed_positions(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }
}
