//! Append-only score ledger file

use super::record::ScoreRecord;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default ledger location, relative to the working directory
pub const DEFAULT_LEDGER_PATH: &str = "best_scores";

/// Ledger I/O failure
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read score ledger {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write score ledger {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Result of offering a finished round to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Strictly fewer attempts than any earlier record (or the first record)
    NewBest { previous: Option<u32> },
    /// Equal to or worse than the standing best; nothing written
    NoImprovement { best: u32 },
}

impl RecordOutcome {
    #[must_use]
    pub const fn is_new_best(self) -> bool {
        matches!(self, Self::NewBest { .. })
    }
}

/// Score ledger backed by a text file
///
/// The file is opened for each read or append and never rewritten.
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
}

impl ScoreLedger {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All parseable records, in file order
    ///
    /// A missing file is an empty ledger. Malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Read` if the file exists but cannot be read.
    pub fn records(&self) -> Result<Vec<ScoreRecord>, LedgerError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(LedgerError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let record = ScoreRecord::parse(line);
                if record.is_none() {
                    debug!(line, "skipping malformed ledger line");
                }
                record
            })
            .collect();

        Ok(records)
    }

    /// Lowest attempt count on record, `None` when there is no usable record
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Read` if the file exists but cannot be read.
    pub fn best_attempts(&self) -> Result<Option<u32>, LedgerError> {
        Ok(self.records()?.iter().map(|r| r.attempts).min())
    }

    /// Append a record if `attempts` beats the standing best
    ///
    /// Ties are not improvements.
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` if the ledger cannot be read or appended to.
    pub fn record_if_best(&self, word: &str, attempts: u32) -> Result<RecordOutcome, LedgerError> {
        self.record_if_best_at(word, attempts, Local::now().naive_local())
    }

    /// `record_if_best` with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError` if the ledger cannot be read or appended to.
    pub fn record_if_best_at(
        &self,
        word: &str,
        attempts: u32,
        timestamp: NaiveDateTime,
    ) -> Result<RecordOutcome, LedgerError> {
        let previous = self.best_attempts()?;

        if let Some(best) = previous
            && attempts >= best
        {
            return Ok(RecordOutcome::NoImprovement { best });
        }

        self.append(&ScoreRecord::new(timestamp, word, attempts))?;
        info!(word, attempts, ?previous, "new best score recorded");
        Ok(RecordOutcome::NewBest { previous })
    }

    fn append(&self, record: &ScoreRecord) -> Result<(), LedgerError> {
        let write_err = |source| LedgerError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{record}").map_err(write_err)
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ledger() -> (TempDir, ScoreLedger) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("best_scores"));
        (dir, ledger)
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_file_has_no_best() {
        let (_dir, ledger) = ledger();
        assert_eq!(ledger.best_attempts().unwrap(), None);
        assert!(ledger.records().unwrap().is_empty());
    }

    #[test]
    fn best_is_minimum_not_latest() {
        let (_dir, ledger) = ledger();
        fs::write(
            ledger.path(),
            "2025-01-01 10:00:00 - word: wone - attempts: 5\n\
             2025-01-01 11:00:00 - word: wone - attempts: 3\n\
             2025-01-01 12:00:00 - word: wtwo - attempts: 7\n",
        )
        .unwrap();

        assert_eq!(ledger.best_attempts().unwrap(), Some(3));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (_dir, ledger) = ledger();
        fs::write(
            ledger.path(),
            "not a record\n\
             \n\
             2025-01-01 10:00:00 - word: cat - attempts: oops\n\
             2025-01-01 10:00:00 - word: cat - attempts: 8\n",
        )
        .unwrap();

        let records = ledger.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(ledger.best_attempts().unwrap(), Some(8));
    }

    #[test]
    fn only_malformed_lines_means_no_record() {
        let (_dir, ledger) = ledger();
        fs::write(ledger.path(), "junk\nmore junk\n").unwrap();
        assert_eq!(ledger.best_attempts().unwrap(), None);
    }

    #[test]
    fn first_record_is_new_best() {
        let (_dir, ledger) = ledger();
        let outcome = ledger.record_if_best_at("python", 9, noon()).unwrap();

        assert_eq!(outcome, RecordOutcome::NewBest { previous: None });
        assert_eq!(
            fs::read_to_string(ledger.path()).unwrap(),
            "2025-01-02 12:00:00 - word: python - attempts: 9\n"
        );
    }

    #[test]
    fn strictly_better_appends() {
        let (_dir, ledger) = ledger();
        ledger.record_if_best_at("python", 9, noon()).unwrap();
        let outcome = ledger.record_if_best_at("cat", 4, noon()).unwrap();

        assert_eq!(outcome, RecordOutcome::NewBest { previous: Some(9) });
        assert!(outcome.is_new_best());
        assert_eq!(ledger.records().unwrap().len(), 2);
        assert_eq!(ledger.best_attempts().unwrap(), Some(4));
    }

    #[test]
    fn tie_and_worse_do_not_append() {
        let (_dir, ledger) = ledger();
        ledger.record_if_best_at("cat", 4, noon()).unwrap();

        assert_eq!(
            ledger.record_if_best_at("dog", 4, noon()).unwrap(),
            RecordOutcome::NoImprovement { best: 4 }
        );
        assert_eq!(
            ledger.record_if_best_at("banana", 12, noon()).unwrap(),
            RecordOutcome::NoImprovement { best: 4 }
        );
        assert_eq!(ledger.records().unwrap().len(), 1);
    }

    #[test]
    fn appends_after_existing_content() {
        let (_dir, ledger) = ledger();
        fs::write(ledger.path(), "header line from elsewhere\n").unwrap();
        ledger.record_if_best_at("sun", 3, noon()).unwrap();

        let content = fs::read_to_string(ledger.path()).unwrap();
        assert!(content.starts_with("header line from elsewhere\n"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("missing-dir").join("best_scores"));

        let err = ledger.record_if_best_at("sun", 3, noon()).unwrap_err();
        assert!(matches!(err, LedgerError::Write { .. }));
    }
}
