//! Structured logging.
//!
//! Installs a `tracing` subscriber writing human-readable lines to stdout.
//! The filter comes from configuration only; the environment is never
//! consulted, so the startup line cannot be silenced from outside.

use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Build the filter from the configured directive.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(&config.log_filter)
}

/// Initialize the global tracing subscriber.
///
/// Calling this twice in one process panics, so only `main` does it.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), ParseError> {
    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(())
}
