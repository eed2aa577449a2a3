//! Score ledger
//!
//! Durable, append-only record of best attempt counts. The ledger only grows
//! when a winning round strictly beats every earlier record.

mod record;
mod store;

pub use record::{ScoreRecord, TIMESTAMP_FORMAT};
pub use store::{DEFAULT_LEDGER_PATH, LedgerError, RecordOutcome, ScoreLedger};
