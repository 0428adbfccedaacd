//! Logging setup.
//!
//! Installs the global tracing subscriber for the CLI. Library code only
//! emits events through the `tracing` macros and never configures output
//! itself.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the default level is
/// `info`, or `debug` when `verbose` is requested. Safe to call more than
/// once — later calls leave the existing subscriber in place.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
