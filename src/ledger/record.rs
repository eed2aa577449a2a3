//! Ledger line format
//!
//! One record per line: `2024-05-01 18:22:03 - word: python - attempts: 9`

use chrono::NaiveDateTime;
use std::fmt;

/// Timestamp layout used in the ledger file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const WORD_MARKER: &str = " - word: ";
const ATTEMPTS_MARKER: &str = " - attempts: ";

/// One winning round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub timestamp: NaiveDateTime,
    pub word: String,
    pub attempts: u32,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(timestamp: NaiveDateTime, word: impl Into<String>, attempts: u32) -> Self {
        Self {
            timestamp,
            word: word.into(),
            attempts,
        }
    }

    /// Parse a ledger line
    ///
    /// Returns `None` for anything not matching the record shape.
    ///
    /// # Examples
    /// ```
    /// use hangman::ledger::ScoreRecord;
    ///
    /// let line = "2024-05-01 18:22:03 - word: python - attempts: 9";
    /// let record = ScoreRecord::parse(line).unwrap();
    /// assert_eq!(record.word, "python");
    /// assert_eq!(record.attempts, 9);
    ///
    /// assert!(ScoreRecord::parse("attempts: 9").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (timestamp, rest) = line.split_once(WORD_MARKER)?;
        let (word, attempts) = rest.rsplit_once(ATTEMPTS_MARKER)?;

        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
        let attempts = attempts.trim().parse().ok()?;
        if word.is_empty() || !word.bytes().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self::new(timestamp, word, attempts))
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{WORD_MARKER}{}{ATTEMPTS_MARKER}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.word,
            self.attempts
        )
    }
}
