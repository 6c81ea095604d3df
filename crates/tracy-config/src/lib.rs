//! # tracy-config
//!
//! Layered configuration loading for tracy using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRACY_*` prefix, `__` as separator)
//! 2. Project-level `./tracy.toml`
//! 3. User-level `~/.config/tracy/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRACY_DATABASE__PATH` -> `database.path`,
//! `TRACY_LEDGER__ALLOW_ZERO_HOURS` -> `ledger.allow_zero_hours`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tracy_config::TracyConfig;
//!
//! let config = TracyConfig::load().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod ledger;

pub use database::{DEFAULT_DATABASE_PATH, DatabaseConfig};
pub use error::ConfigError;
pub use ledger::{LedgerConfig, ReportsConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tracy.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TracyConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

impl TracyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TRACY_").split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tracy").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TracyConfig::default();
        assert_eq!(config.database.path, DEFAULT_DATABASE_PATH);
        assert!(config.ledger.allow_zero_hours);
        assert!(!config.reports.include_empty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_database_path_is_invalid() {
        let mut config = TracyConfig::default();
        config.database.path = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "database.path"
        ));
    }
}
