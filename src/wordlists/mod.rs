//! Word lists for Hangman
//!
//! Loads secret pools from files or the embedded default list, and draws
//! secrets from difficulty-filtered pools.

mod embedded;
pub mod loader;
pub mod pool;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{WordSourceError, load_words};
pub use pool::{difficulty_pool, draw_secret};
