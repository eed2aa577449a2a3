//! Word list loading utilities
//!
//! Provides functions to load secret pools from files or use the embedded constants.

use super::DEFAULT_WORDS;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failure to produce a usable word pool
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read word list {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("word list contains no valid words")]
    NoValidWords,
}

/// Load the secret pool
///
/// With a path, reads that file (one word per line); without one, uses the
/// embedded default list. Lines that are not purely alphabetic after trimming
/// are skipped.
///
/// # Errors
///
/// - `NotFound` if a path was given but does not exist
/// - `Io` if the file exists but cannot be read
/// - `NoValidWords` if filtering leaves nothing
///
/// # Examples
/// ```
/// use hangman::wordlists::load_words;
///
/// let words = load_words(None).unwrap();
/// assert!(!words.is_empty());
/// ```
pub fn load_words(path: Option<&Path>) -> Result<Vec<Word>, WordSourceError> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(DEFAULT_WORDS),
    };

    if words.is_empty() {
        return Err(WordSourceError::NoValidWords);
    }

    info!(count = words.len(), source = ?path, "loaded word list");
    Ok(words)
}

/// Load words from a file
///
/// Returns every valid word in the file, possibly none.
///
/// # Errors
///
/// Returns `NotFound` for a missing file and `Io` for any other read failure.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordSourceError::NotFound(path.to_path_buf())
        } else {
            WordSourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed)
                    .inspect_err(|e| debug!(line = trimmed, error = %e, "skipping word"))
                    .ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "x-ray", "Mouse"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "mouse");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s.trim()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["python", "c++", "", "two words", "Keyboard"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "python");
        assert_eq!(words[1].text(), "keyboard");
    }

    #[test]
    fn load_words_defaults_to_embedded() {
        let words = load_words(None).unwrap();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn load_from_file_filters_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\n  Banana  \n\n42\nice cream").unwrap();
        writeln!(file, "cherry").unwrap();

        let words = load_words(Some(file.path())).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_words(Some(&missing)).unwrap_err();
        assert!(matches!(err, WordSourceError::NotFound(p) if p == missing));
    }

    #[test]
    fn load_file_without_valid_words_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "123\n!!!\n\n").unwrap();

        let err = load_words(Some(file.path())).unwrap_err();
        assert!(matches!(err, WordSourceError::NoValidWords));
    }

    #[test]
    fn load_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            load_words(Some(file.path())),
            Err(WordSourceError::NoValidWords)
        ));
    }
}
