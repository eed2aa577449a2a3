//! Command implementations

pub mod best;
pub mod simple;
pub mod simulate;

pub use best::{LedgerSummary, summarize_ledger};
pub use simple::{play_console, run_simple};
pub use simulate::{
    FrequencyGuesser, Guesser, SimulatedRound, SimulationResult, run_simulation, simulate_round,
};
