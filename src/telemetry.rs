//! # Telemetry
//!
//! Tracing subscriber setup. `RUST_LOG` overrides the configured level.

use crate::config::{LogFormat, LoggingSettings};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Subscriber setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the filter from `RUST_LOG`, falling back to `level`.
///
/// # Errors
///
/// Returns an error if `level` does not parse.
pub fn env_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the level is invalid or a subscriber is already
/// installed.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(&settings.level)?);

    match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init()?,
    }
    Ok(())
}
