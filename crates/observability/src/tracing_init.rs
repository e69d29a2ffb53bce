//! Tracing/logging initialization.
//!
//! Auth events (failed logins, forbidden actions) are logged structured so
//! audit trails can tell outages from attacks. Secrets and digests never
//! appear in fields; the types involved redact them in their `Debug` impls.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON lines, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
