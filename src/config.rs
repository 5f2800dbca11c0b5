//! TOML-based application configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::i18n::Locale;

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults, so an absent or partial file still yields a
/// working setup pointing at the conventional dataset location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Dataset location.
    pub data: DataConfig,
    /// Display defaults.
    pub display: DisplayConfig,
    /// API server parameters (used with the `api` feature).
    pub server: ServerConfig,
}

/// Dataset location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Path to the OWID energy CSV.
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "data/owid-energy-data.csv".to_string(),
        }
    }
}

/// Display defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Default locale code: `"en"` or `"id"`.
    pub locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
        }
    }
}

/// API server parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port for the JSON API.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"display.locale"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl AppConfig {
    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Resolved default locale.
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.display.locale).unwrap_or_default()
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.data.path.trim().is_empty() {
            errors.push(ConfigError {
                field: "data.path".into(),
                message: "must not be empty".into(),
            });
        }
        if Locale::parse(&self.display.locale).is_none() {
            errors.push(ConfigError {
                field: "display.locale".into(),
                message: format!("must be \"en\" or \"id\", got \"{}\"", self.display.locale),
            });
        }
        if self.server.port == 0 {
            errors.push(ConfigError {
                field: "server.port".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
