//! Diagnostic logging setup.
//!
//! All progress and diagnostic messages go through `tracing` and are written
//! to stderr, keeping stdout for the run summary. `RUST_LOG` overrides the
//! default filter.

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive.
const DEFAULT_FILTER: &str = "utf8_convert=info";

/// Filter directive used with `--verbose`.
const VERBOSE_FILTER: &str = "utf8_convert=debug";

/// Builds the filter for the given verbosity.
fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global stderr subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
