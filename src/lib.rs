//! Hangman
//!
//! A word-guessing game: guess a hidden word letter by letter (or all at once)
//! before the penalty reaches its limit.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::round::{Outcome, Round, RoundConfig, Status};
//!
//! let mut round = Round::new(Word::new("cat").unwrap(), &RoundConfig::default());
//!
//! assert!(matches!(round.submit_guess("z"), Outcome::WrongLetter { .. }));
//! round.submit_guess("a");
//! assert_eq!(round.masked(), "_ a _");
//!
//! round.submit_guess("cat");
//! assert_eq!(round.status(), Status::Won);
//! assert_eq!(round.attempts(), 3);
//! ```

// Core domain types
pub mod core;

// Round state machine and session
pub mod round;

// Best-score ledger
pub mod ledger;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostics
pub mod logging;
