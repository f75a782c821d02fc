//! Tracing subscriber set-up for the binary.
//!
//! Log lines go to stderr; stdout carries only the run summary.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter applied when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, then `LOG_LEVEL`, then
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let _already_set = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}
