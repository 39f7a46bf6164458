//! Tracing subscriber setup for the `katgen` binary
//!
//! Libraries in the workspace only emit events:
//! - WARN: a candidate suite block was skipped
//! - INFO: per-suite and per-input progress
//! - DEBUG: dialect selection and per-block field discovery

use tracing_subscriber::EnvFilter;

/// Environment variable selecting JSON output when set to `json`
pub const LOG_FORMAT_ENV: &str = "KATGEN_LOG_FORMAT";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize a human-readable subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize a JSON subscriber writing to stderr.
pub fn init_json(default_level: &str) {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}

/// Pick [`init`] or [`init_json`] from `KATGEN_LOG_FORMAT`.
pub fn init_from_env(default_level: &str) {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(format) if format.eq_ignore_ascii_case("json") => init_json(default_level),
        _ => init(default_level),
    }
}

/// Initialize the subscriber for tests.
///
/// Uses `try_init` so repeated calls are harmless.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("debug"))
        .with_test_writer()
        .try_init();
}
