//! Terminal output formatting
//!
//! Display utilities for the console game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_finish, print_ledger_summary, print_outcome, print_round_state, print_simulation_result,
};
