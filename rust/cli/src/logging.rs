//! Tracing setup for the `pokerhand` binary.
//!
//! Log lines go to stderr so command output on stdout stays clean. The level
//! defaults to `warn` and can be raised with `RUST_LOG`, e.g.
//! `RUST_LOG=pokerhand_engine=debug pokerhand sim`.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
