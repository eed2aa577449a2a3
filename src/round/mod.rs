//! Round engine
//!
//! The state machine for one guessing round, its configuration, and the
//! session that deals rounds and books their results.

mod config;
pub mod engine;
mod outcome;
pub mod session;
mod state;

pub use config::{
    DEFAULT_MAX_PENALTY, DEFAULT_TIME_LIMIT, HINT_SURCHARGE, RoundConfig, WRONG_LETTER_PENALTY,
    WRONG_WORD_PENALTY,
};
pub use outcome::Outcome;
pub use session::{Session, Statistics};
pub use state::{PLACEHOLDER, Round, Status};
