//! Logging setup shared by the server and the CLI.
//!
//! Configurable via the RUST_LOG environment variable; `default_filter` applies
//! when it is unset.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for the HTTP server
pub const SERVER_FILTER: &str = "geo_taxonomy=info,geo_taxonomy_web=info,tower_http=debug";

/// Default filter for command-line use (stdout stays clean for JSON output)
pub const CLI_FILTER: &str = "geo_taxonomy=warn";

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
