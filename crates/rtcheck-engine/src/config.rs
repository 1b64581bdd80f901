//! Check settings
//!
//! Settings are read explicitly at startup, either from JSON or from the
//! `RTCHECK_ENABLE_CHECKS` environment variable, and written to the global
//! flag with [`CheckSettings::apply`]. Nothing here runs implicitly.
//!
//! ```ignore
//! CheckSettings::from_env()?.apply();
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::runtime_checks::RuntimeChecks;

/// Environment variable consulted by [`CheckSettings::from_env`]
pub const ENABLE_CHECKS_ENV: &str = "RTCHECK_ENABLE_CHECKS";

/// Errors while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed JSON settings document
    #[error("Invalid check settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized boolean spelling
    #[error("Invalid value '{value}' for {var} (expected one of 1/0, true/false, on/off, yes/no)")]
    InvalidFlag { var: &'static str, value: String },

    /// Environment variable is not valid unicode
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Runtime check settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckSettings {
    /// Whether wrapped callables evaluate their checks
    pub enable_checks: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            enable_checks: true,
        }
    }
}

impl CheckSettings {
    /// Parse settings from a JSON document such as `{"enableChecks": false}`.
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ENABLE_CHECKS_ENV) {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(std::env::VarError::NotPresent) => Self::from_env_value(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ConfigError::NotUnicode(ENABLE_CHECKS_ENV))
            }
        }
    }

    /// Build settings from the raw value of [`ENABLE_CHECKS_ENV`]
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let enable_checks = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => true,
            "0" | "false" | "off" | "no" => false,
            _ => {
                return Err(ConfigError::InvalidFlag {
                    var: ENABLE_CHECKS_ENV,
                    value: raw.to_string(),
                })
            }
        };
        Ok(Self { enable_checks })
    }

    /// Write these settings to the global flag
    pub fn apply(&self) {
        info!(enable_checks = self.enable_checks, "applying runtime check settings");
        RuntimeChecks::set_enabled(self.enable_checks);
    }
}
