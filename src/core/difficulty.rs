//! Difficulty levels
//!
//! Difficulty only controls which secrets are eligible, by word length.

use std::fmt;

/// Longest word accepted by the easy pool
pub const EASY_MAX_LEN: usize = 5;

/// Shortest word accepted by the hard pool
pub const HARD_MIN_LEN: usize = 7;

/// Word-length difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Words of at most 5 letters
    Easy,
    /// Any word
    #[default]
    Medium,
    /// Words of at least 7 letters
    Hard,
}

impl Difficulty {
    /// All levels in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Create difficulty from name string
    ///
    /// Supported names: "easy"/"e"/"1", "medium"/"m"/"2", "hard"/"h"/"3"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Some(Self::Easy),
            "medium" | "m" | "2" => Some(Self::Medium),
            "hard" | "h" | "3" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Whether a word of `len` letters belongs to this difficulty's pool
    #[must_use]
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Self::Easy => len <= EASY_MAX_LEN,
            Self::Medium => true,
            Self::Hard => len >= HARD_MIN_LEN,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown difficulty '{s}' (use easy, medium or hard)"))
    }
}
