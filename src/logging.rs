//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FLOW_SIGHT_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr
///
/// `FLOW_SIGHT_LOG` wins over `fallback_filter`. An unparseable filter falls
/// back to warnings only.
pub fn init_tracing(fallback_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
