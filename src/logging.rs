//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset; quiet enough not to disturb the TUI
pub const DEFAULT_FILTER: &str = "hangman=warn";

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=hangman=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::trace!("tracing initialised");
}
