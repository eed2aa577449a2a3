//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, MessageStyle, Screen, run_tui};
