//! Diagnostic logging.
//!
//! Library code emits `tracing` events; the subscriber writes them to stderr
//! so stdout stays reserved for passwords. Passwords are never logged.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive, e.g. `PASSGEN_LOG=debug`.
pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Install the global subscriber. `default_level` applies when
/// [`LOG_ENV`] is unset or invalid. Later calls are no-ops.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
