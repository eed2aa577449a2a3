//! Per-call outcome signals
//!
//! Every engine call returns exactly one `Outcome`. Win or loss is read from
//! the round's status, not from the outcome.

use std::fmt;

/// What a single engine call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty or non-alphabetic input; nothing changed
    InvalidInput,
    /// The round is already won or lost; nothing changed
    RoundFinished,
    /// Letter was guessed before; nothing changed
    AlreadyTried(u8),
    /// Letter occurs `count` times and is now revealed
    LetterFound { letter: u8, count: usize },
    /// Letter is absent; penalty charged
    WrongLetter {
        letter: u8,
        penalty: u32,
        max_penalty: u32,
    },
    /// Whole word matched
    WordFound,
    /// Whole word did not match; penalty charged
    WrongWord { penalty: u32, max_penalty: u32 },
    /// Hint revealed every occurrence of `letter`
    HintRevealed { letter: u8, surcharge: u32 },
    /// Time budget ran out; round lost
    TimeExpired,
}

impl Outcome {
    /// Whether the call changed the round
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(
            self,
            Self::InvalidInput | Self::RoundFinished | Self::AlreadyTried(_)
        )
    }

    /// Whether the call charged a penalty
    #[must_use]
    pub const fn is_penalty(&self) -> bool {
        matches!(self, Self::WrongLetter { .. } | Self::WrongWord { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Please enter letters only."),
            Self::RoundFinished => write!(f, "This round is already over."),
            Self::AlreadyTried(letter) => {
                write!(f, "You already tried '{}'.", char::from(*letter))
            }
            Self::LetterFound { letter, count } => {
                write!(f, "Found letter '{}'", char::from(*letter))?;
                if *count > 1 {
                    write!(f, " ({count} times)")?;
                }
                write!(f, "!")
            }
            Self::WrongLetter {
                penalty,
                max_penalty,
                ..
            } => write!(f, "Wrong letter! Penalties: {penalty}/{max_penalty}"),
            Self::WordFound => write!(f, "You found the word!"),
            Self::WrongWord {
                penalty,
                max_penalty,
            } => write!(f, "Wrong word! Penalties: {penalty}/{max_penalty}"),
            Self::HintRevealed { letter, surcharge } => write!(
                f,
                "Hint revealed '{}' (+{surcharge} attempts).",
                char::from(*letter)
            ),
            Self::TimeExpired => write!(f, "Time's up!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Outcome::WrongLetter {
                letter: b'z',
                penalty: 3,
                max_penalty: 12
            }
            .to_string(),
            "Wrong letter! Penalties: 3/12"
        );
        assert_eq!(
            Outcome::WrongWord {
                penalty: 10,
                max_penalty: 12
            }
            .to_string(),
            "Wrong word! Penalties: 10/12"
        );
        assert_eq!(
            Outcome::AlreadyTried(b'a').to_string(),
            "You already tried 'a'."
        );
        assert_eq!(
            Outcome::LetterFound {
                letter: b'n',
                count: 2
            }
            .to_string(),
            "Found letter 'n' (2 times)!"
        );
        assert_eq!(
            Outcome::LetterFound {
                letter: b'c',
                count: 1
            }
            .to_string(),
            "Found letter 'c'!"
        );
        assert_eq!(
            Outcome::HintRevealed {
                letter: b's',
                surcharge: 2
            }
            .to_string(),
            "Hint revealed 's' (+2 attempts)."
        );
    }

    #[test]
    fn rejections_do_not_change_state() {
        assert!(!Outcome::InvalidInput.changed_state());
        assert!(!Outcome::RoundFinished.changed_state());
        assert!(!Outcome::AlreadyTried(b'q').changed_state());
        assert!(Outcome::WordFound.changed_state());
        assert!(Outcome::TimeExpired.changed_state());
    }

    #[test]
    fn penalty_classification() {
        assert!(
            Outcome::WrongWord {
                penalty: 5,
                max_penalty: 12
            }
            .is_penalty()
        );
        assert!(
            !Outcome::HintRevealed {
                letter: b'a',
                surcharge: 2
            }
            .is_penalty()
        );
    }
}
