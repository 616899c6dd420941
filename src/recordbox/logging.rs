//! Diagnostic logging.
//!
//! The library only emits `tracing` events. The binary installs a
//! subscriber that writes them to stderr, keeping stdout reserved for
//! command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug` or
/// `recordbox=trace`.
pub const LOG_ENV: &str = "RECORDBOX_LOG";

/// Level used when `LOG_ENV` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
