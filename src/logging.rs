//! Logging set-up.
//!
//! Events go to stderr so stdout carries only command output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "text_summarizer=debug,warn";

/// Builds the log filter, preferring `RUST_LOG` when it is set and valid.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global tracing subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// text_summarizer::setup_logging(false);
/// ```
pub fn setup_logging(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
