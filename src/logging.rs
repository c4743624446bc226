//! Tracing subscriber setup.

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber for `filter` (the `RUST_LOG` value from [`crate::config::AppConfig`]).
/// An unparsable filter falls back to the default one. A second call is a no-op.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
