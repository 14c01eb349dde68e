//! Diagnostic logging via `tracing`.
//!
//! Log lines go to stderr so stdout stays clean for reports. The filter comes
//! from `CARVAL_LOG` (same syntax as `RUST_LOG`), default `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CARVAL_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

/// Install the subscriber only when `CARVAL_LOG` is set.
///
/// Used by the TUI, where stray stderr output would paint over the alternate
/// screen unless the user asked for it.
pub fn init_if_requested() -> bool {
    if std::env::var_os(LOG_ENV).is_some() {
        init();
        true
    } else {
        false
    }
}
