//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Fall back to the configured log level when `RUST_LOG` is unset

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise `bus_config_manager=<level>`.
pub fn filter_for(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bus_config_manager={},cfgmgr={}", log_level, log_level).into())
}

/// Install the global subscriber.
///
/// Returns `false` when another subscriber was already installed; that one
/// stays in place and receives a debug event about the skipped install.
pub fn init_logging(log_level: &str) -> bool {
    match tracing_subscriber::registry()
        .with(filter_for(log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Global subscriber already installed, keeping it");
            false
        }
    }
}
