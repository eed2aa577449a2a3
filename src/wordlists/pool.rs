//! Difficulty pools and secret selection

use crate::core::{Difficulty, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Words eligible for a difficulty
///
/// Falls back to the whole list when the length filter leaves nothing.
#[must_use]
pub fn difficulty_pool(words: &[Word], difficulty: Difficulty) -> Vec<&Word> {
    let pool: Vec<&Word> = words
        .iter()
        .filter(|w| difficulty.accepts(w.len()))
        .collect();

    if pool.is_empty() {
        words.iter().collect()
    } else {
        pool
    }
}

/// Draw one secret uniformly from the difficulty pool
///
/// Returns `None` only for an empty word list.
///
/// # Examples
/// ```
/// use hangman::core::Difficulty;
/// use hangman::wordlists::{draw_secret, loader::words_from_slice};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let words = words_from_slice(&["cat", "elephant"]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = draw_secret(&words, Difficulty::Hard, &mut rng).unwrap();
/// assert_eq!(secret.text(), "elephant");
/// ```
pub fn draw_secret<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'a Word> {
    difficulty_pool(words, difficulty).choose(rng).copied()
}
