//! Round transition functions
//!
//! Each function takes the current round by reference and returns the next
//! round together with the outcome signal. The input round is never mutated,
//! so any sequence of submissions can be replayed deterministically.

use super::config::{HINT_SURCHARGE, WRONG_LETTER_PENALTY, WRONG_WORD_PENALTY};
use super::outcome::Outcome;
use super::state::{Round, Status};
use crate::core::Guess;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Resolve a raw letter or word submission
///
/// Input validation comes first: invalid text is rejected even on a finished
/// round. Neither rejection touches any counter.
#[must_use]
pub fn resolve_guess(round: &Round, raw: &str) -> (Round, Outcome) {
    let Some(guess) = Guess::parse(raw) else {
        return (round.clone(), Outcome::InvalidInput);
    };

    if round.is_finished() {
        return (round.clone(), Outcome::RoundFinished);
    }

    let mut next = round.clone();
    let outcome = match guess {
        Guess::Word(word) => next.guess_word(&word),
        Guess::Letter(letter) => next.guess_letter(letter),
    };

    debug!(
        guess = %raw.trim(),
        ?outcome,
        penalty = next.penalty,
        attempts = next.attempts,
        status = ?next.status,
        "resolved guess"
    );
    (next, outcome)
}

/// Reveal one hidden letter chosen uniformly among hidden positions
///
/// Every occurrence of the chosen letter is revealed, whatever position was
/// drawn. Costs `HINT_SURCHARGE` attempts and no penalty.
#[must_use]
pub fn resolve_hint<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> (Round, Outcome) {
    if round.is_finished() {
        return (round.clone(), Outcome::RoundFinished);
    }

    // An in-progress round always has a hidden position: full reveal means Won.
    let hidden = round.unrevealed_positions();
    let Some(&position) = hidden.choose(rng) else {
        return (round.clone(), Outcome::RoundFinished);
    };

    let mut next = round.clone();
    let letter = next.secret.char_at(position);
    next.reveal(letter);
    next.used_letters.insert(letter);
    next.attempts += HINT_SURCHARGE;
    next.check_solved();

    debug!(letter = %char::from(letter), attempts = next.attempts, "hint applied");
    (
        next,
        Outcome::HintRevealed {
            letter,
            surcharge: HINT_SURCHARGE,
        },
    )
}

/// Mark an in-progress round as lost
#[must_use]
pub fn resolve_timeout(round: &Round) -> (Round, Outcome) {
    if round.is_finished() {
        return (round.clone(), Outcome::RoundFinished);
    }

    let mut next = round.clone();
    next.status = Status::Lost;
    (next, Outcome::TimeExpired)
}

impl Round {
    fn guess_word(&mut self, word: &str) -> Outcome {
        self.attempts += 1;

        if word == self.secret.text() {
            self.revealed = self.secret.chars().iter().copied().map(Some).collect();
            self.status = Status::Won;
            return Outcome::WordFound;
        }

        self.charge(WRONG_WORD_PENALTY);
        Outcome::WrongWord {
            penalty: self.penalty,
            max_penalty: self.max_penalty,
        }
    }

    fn guess_letter(&mut self, letter: u8) -> Outcome {
        if !self.used_letters.insert(letter) {
            return Outcome::AlreadyTried(letter);
        }
        self.attempts += 1;

        let count = self.reveal(letter);
        if count > 0 {
            self.check_solved();
            return Outcome::LetterFound { letter, count };
        }

        self.charge(WRONG_LETTER_PENALTY);
        Outcome::WrongLetter {
            letter,
            penalty: self.penalty,
            max_penalty: self.max_penalty,
        }
    }

    /// Reveal every occurrence of `letter`, returning how many positions hold it
    fn reveal(&mut self, letter: u8) -> usize {
        let positions = self.secret.positions_of(letter);
        for &i in positions {
            self.revealed[i] = Some(letter);
        }
        positions.len()
    }

    fn charge(&mut self, amount: u32) {
        self.penalty += amount;
        if self.penalty >= self.max_penalty {
            self.status = Status::Lost;
        }
    }

    fn check_solved(&mut self) {
        if self.is_solved() {
            self.status = Status::Won;
        }
    }
}
