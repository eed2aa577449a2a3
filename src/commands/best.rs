//! Best-score command
//!
//! Summarises the score ledger.

use crate::ledger::{LedgerError, ScoreLedger, ScoreRecord};

/// Snapshot of the ledger contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_records: usize,
    /// Earliest record holding the lowest attempts
    pub best: Option<ScoreRecord>,
    /// Most recent records, newest first
    pub recent: Vec<ScoreRecord>,
}

/// Read the ledger and summarise it
///
/// # Errors
///
/// Returns a `LedgerError` if the ledger file exists but cannot be read.
pub fn summarize_ledger(ledger: &ScoreLedger, recent: usize) -> Result<LedgerSummary, LedgerError> {
    let records = ledger.records()?;

    // min_by_key keeps the first of equal elements
    let best = records.iter().min_by_key(|r| r.attempts).cloned();
    let recent = records.iter().rev().take(recent).cloned().collect();

    Ok(LedgerSummary {
        total_records: records.len(),
        best,
        recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn summary_of_missing_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("best_scores"));

        let summary = summarize_ledger(&ledger, 5).unwrap();
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.best, None);
        assert!(summary.recent.is_empty());
    }

    #[test]
    fn summary_picks_first_lowest_and_recent() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::new(dir.path().join("best_scores"));
        fs::write(
            ledger.path(),
            "2025-01-01 10:00:00 - word: python - attempts: 9\n\
             bogus\n\
             2025-01-02 10:00:00 - word: cat - attempts: 3\n\
             2025-01-03 10:00:00 - word: sun - attempts: 3\n",
        )
        .unwrap();

        let summary = summarize_ledger(&ledger, 2).unwrap();
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.best.unwrap().word, "cat");
        let recent: Vec<&str> = summary.recent.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(recent, ["sun", "cat"]);
    }
}
