//! # Configuration
//!
//! Layered service settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. The file passed with `--config` (optional)
//! 4. `PARCEL_RATES__<SECTION>__<KEY>` environment variables
//!
//! `EASYPOST_API_KEY` fills `provider.api_key` when no other source set it.

use crate::application::services::fallback::FallbackPolicy;
use crate::application::services::ranking_strategy::RankingStrategyKind;
use crate::infrastructure::carriers::easypost::DEFAULT_BASE_URL;
use crate::infrastructure::persistence::in_memory::DEFAULT_CAPACITY;
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "PARCEL_RATES";

/// Fallback environment variable for the provider key.
pub const API_KEY_ENV: &str = "EASYPOST_API_KEY";

const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A loaded value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener.
    pub server: ServerSettings,
    /// Upstream rate provider.
    pub provider: ProviderSettings,
    /// Rate quoting behavior.
    pub rates: RateSettings,
    /// Log output.
    pub logging: LoggingSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Listening port; must be non-zero.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream provider settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// EasyPost API key. Without one, live requests fail with an
    /// authentication error.
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_ms: 10_000,
        }
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Rate quoting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSettings {
    /// What to serve when the provider fails.
    pub fallback: FallbackPolicy,
    /// Maximum cached shipments.
    pub cache_capacity: usize,
    /// Ordering used when a request names none.
    pub default_strategy: RankingStrategyKind,
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            cache_capacity: DEFAULT_CAPACITY,
            default_strategy: RankingStrategyKind::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable, multi-line.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Loads settings from every source.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or a value is invalid.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let defaults = config::Config::try_from(&Self::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let mut settings: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if settings.provider.api_key.is_none() {
            settings.provider.api_key = std::env::var(API_KEY_ENV).ok();
        }
        settings.provider.api_key = settings
            .provider
            .api_key
            .filter(|key| !key.trim().is_empty());

        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port must be non-zero"));
        }
        if self.provider.timeout_ms == 0 {
            return Err(ConfigError::invalid("provider.timeout_ms must be positive"));
        }
        if self.rates.cache_capacity == 0 {
            return Err(ConfigError::invalid("rates.cache_capacity must be positive"));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("provider.base_url cannot be empty"));
        }
        Ok(())
    }
}
