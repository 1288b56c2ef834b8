//! Logging initialisation.
//!
//! The library only emits `tracing` events; embedding applications either
//! install their own subscriber or call [`init`].
//!
//! # Environment Variables
//!
//! - `QUANTRACK_LOG` - filter directives in `EnvFilter` syntax, e.g.
//!   `QUANTRACK_LOG=quantrack_runner=debug`. Defaults to `warn`.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "QUANTRACK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `QUANTRACK_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(env_filter())
        .try_init()
        .is_ok()
}
