//! Runtime configuration from environment variables.
//!
//! `.env` is loaded by `main` through dotenvy before [`Config::from_env`]
//! runs. Every variable has a default.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::ProductDefaults;

#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Catalog JSON file; `None` serves the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Seconds between catalog reloads; 0 disables the refresher
    pub catalog_refresh_secs: u64,
    pub cache_ttl_secs: u64,
    pub insurance_per_person: Decimal,
    pub default_currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            catalog_path: None,
            catalog_refresh_secs: 600,
            cache_ttl_secs: 30 * 60,
            insurance_per_person: dec!(400),
            default_currency: "INR".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|_| ConfigError { var, value })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", port)?;
        }
        config.catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        if let Some(secs) = lookup("CATALOG_REFRESH_SECS") {
            config.catalog_refresh_secs = parse_var("CATALOG_REFRESH_SECS", secs)?;
        }
        if let Some(secs) = lookup("CACHE_TTL_SECS") {
            config.cache_ttl_secs = parse_var("CACHE_TTL_SECS", secs)?;
        }
        if let Some(rate) = lookup("INSURANCE_PER_PERSON") {
            let rate: Decimal = parse_var("INSURANCE_PER_PERSON", rate)?;
            if rate < Decimal::ZERO {
                return Err(ConfigError {
                    var: "INSURANCE_PER_PERSON",
                    value: rate.to_string(),
                });
            }
            config.insurance_per_person = rate;
        }
        if let Some(currency) = lookup("DEFAULT_CURRENCY") {
            config.default_currency = currency.trim().to_uppercase();
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn product_defaults(&self) -> ProductDefaults {
        ProductDefaults {
            insurance_per_person: self.insurance_per_person,
            currency: self.default_currency.clone(),
        }
    }
}
