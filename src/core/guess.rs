//! Raw guess classification
//!
//! A submission is either a single letter or a whole-word attempt. Anything
//! else (empty, digits, punctuation, inner spaces) is rejected before it can
//! touch round state.

/// A parsed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Single lowercase ASCII letter
    Letter(u8),
    /// Lowercase ASCII word of two or more letters
    Word(String),
}

impl Guess {
    /// Parse a raw submission
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    /// Returns `None` if nothing remains or any character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::parse(" A\n"), Some(Guess::Letter(b'a')));
    /// assert_eq!(Guess::parse("Cat"), Some(Guess::Word("cat".to_string())));
    /// assert_eq!(Guess::parse("c4t"), None);
    /// assert_eq!(Guess::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();

        if text.is_empty() || !text.bytes().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let text = text.to_ascii_lowercase();
        match text.as_bytes() {
            [letter] => Some(Self::Letter(*letter)),
            _ => Some(Self::Word(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        assert_eq!(Guess::parse("e"), Some(Guess::Letter(b'e')));
        assert_eq!(Guess::parse("E"), Some(Guess::Letter(b'e')));
    }

    #[test]
    fn parse_word() {
        assert_eq!(Guess::parse("Python"), Some(Guess::Word("python".into())));
        assert_eq!(Guess::parse("ab"), Some(Guess::Word("ab".into())));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(Guess::parse("  x  "), Some(Guess::Letter(b'x')));
        assert_eq!(Guess::parse("dog\r\n"), Some(Guess::Word("dog".into())));
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_eq!(Guess::parse(""), None);
        assert_eq!(Guess::parse("   "), None);
        assert_eq!(Guess::parse("1"), None);
        assert_eq!(Guess::parse("ca t"), None);
        assert_eq!(Guess::parse("cat!"), None);
        assert_eq!(Guess::parse("é"), None);
    }
}
