//! Configuration for brandkit.
//!
//! Read from `~/.brandkit/config.toml`:
//!
//! ```toml
//! [currency]
//! eur_to_usd = 1.18
//! ```
//!
//! A missing file is not an error. The exchange rate can also be overridden with
//! the `BRANDKIT_EUR_TO_USD` environment variable.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use brandkit_types::ExchangeRate;

/// Environment variable that overrides the configured EUR to USD rate.
pub const RATE_ENV_VAR: &str = "BRANDKIT_EUR_TO_USD";

#[derive(Debug, Default, Deserialize)]
pub struct BrandkitConfig {
    pub currency: Option<CurrencyConfig>,
}

/// Currency conversion settings.
///
/// ```toml
/// [currency]
/// eur_to_usd = 1.18
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CurrencyConfig {
    /// EUR to USD multiplier. Default: 1.18. Must be finite and positive.
    pub eur_to_usd: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl BrandkitConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from the default path. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from `path`. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The configured rate, if present and valid.
    #[must_use]
    pub fn exchange_rate(&self) -> Option<ExchangeRate> {
        let raw = self.currency.as_ref()?.eur_to_usd?;
        match ExchangeRate::new(raw) {
            Ok(rate) => Some(rate),
            Err(err) => {
                tracing::warn!("Ignoring configured currency.eur_to_usd: {err}");
                None
            }
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".brandkit").join("config.toml"))
}

// ============================================================================
// Exchange rate resolution
// ============================================================================

/// Where a resolved exchange rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Environment,
    ConfigFile,
    Default,
}

impl RateSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RateSource::Environment => "environment",
            RateSource::ConfigFile => "config file",
            RateSource::Default => "default",
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    pub rate: ExchangeRate,
    pub source: RateSource,
}

/// Resolve the EUR to USD rate from the environment, then `config`, then the default.
#[must_use]
pub fn resolve_exchange_rate(config: Option<&BrandkitConfig>) -> ResolvedRate {
    let env_value = env::var(RATE_ENV_VAR).ok();
    resolve_exchange_rate_with(env_value.as_deref(), config)
}

/// Same as [`resolve_exchange_rate`] with the environment value passed in.
///
/// Invalid values at any level are logged and skipped.
#[must_use]
pub fn resolve_exchange_rate_with(
    env_value: Option<&str>,
    config: Option<&BrandkitConfig>,
) -> ResolvedRate {
    if let Some(raw) = env_value {
        match parse_env_rate(raw) {
            Some(rate) => {
                return ResolvedRate {
                    rate,
                    source: RateSource::Environment,
                };
            }
            None => tracing::warn!("Ignoring invalid {RATE_ENV_VAR} value: {raw:?}"),
        }
    }

    if let Some(rate) = config.and_then(BrandkitConfig::exchange_rate) {
        return ResolvedRate {
            rate,
            source: RateSource::ConfigFile,
        };
    }

    ResolvedRate {
        rate: ExchangeRate::default(),
        source: RateSource::Default,
    }
}

fn parse_env_rate(raw: &str) -> Option<ExchangeRate> {
    let value: f64 = raw.trim().parse().ok()?;
    ExchangeRate::new(value).ok()
}
