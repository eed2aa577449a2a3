//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types: validated words, parsed guesses
//! and difficulty levels. All of them are pure and know nothing about round state.

mod difficulty;
mod guess;
mod word;

pub use difficulty::{Difficulty, EASY_MAX_LEN, HARD_MIN_LEN};
pub use guess::Guess;
pub use word::{Word, WordError};
