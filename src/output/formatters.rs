//! Formatting utilities for terminal output

use crate::round::Round;

/// Letters shown on the alphabet board
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as a bar
#[must_use]
pub fn lives_bar(round: &Round, width: usize) -> String {
    create_progress_bar(
        f64::from(round.remaining_lives()),
        f64::from(round.max_penalty()),
        width,
    )
}

/// Used letters separated by spaces, or `-` when none
#[must_use]
pub fn used_letters_list(round: &Round) -> String {
    let letters = round.used_letters();
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(|&c| char::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best score label, `-` when the ledger is empty
#[must_use]
pub fn best_label(best: Option<u32>) -> String {
    best.map_or_else(|| "-".to_string(), |b| b.to_string())
}
