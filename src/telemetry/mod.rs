//! Tracing initialization hooks.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with an env filter.
///
/// Configure with RUST_LOG, e.g.:
/// RUST_LOG=debug,tower_http=info,hyper=warn
pub fn init() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info")),
        )
        .init();
}
