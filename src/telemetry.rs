//! Tracing setup.
//!
//! `RUST_LOG` wins over the configured level. Initialisation is
//! idempotent so test binaries can call it from every test.

use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Install the global tracing subscriber. Returns `false` if one was
/// already installed.
pub fn init_tracing(config: &ClientConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
