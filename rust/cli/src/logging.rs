//! Diagnostic logging for the `pokerhand` binary.
//!
//! Command handlers emit `tracing` events unconditionally; nothing is printed
//! until [`init_logging`] installs a subscriber. Logs go to stderr so stdout
//! stays clean for results.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug` or
/// `pokerhand_cli=trace`.
pub const LOG_ENV: &str = "POKERHAND_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from a directive string, falling back to `warn` when it
/// is missing, blank or unparseable.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    match directive.map(str::trim) {
        Some(d) if !d.is_empty() => {
            EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let filter = filter_from(std::env::var(LOG_ENV).ok().as_deref());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
