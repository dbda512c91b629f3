//! User settings for CoreFlow
//!
//! Persists the economic assumptions and display preferences. Nothing about
//! the user's finances is stored here.

use serde::{Deserialize, Serialize};

use super::assumptions::Assumptions;
use super::paths::CoreflowPaths;
use crate::error::CoreflowError;

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: [&str; 5] = ["return", "inflation", "horizon", "splurge-years", "currency"];

/// User settings for CoreFlow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Economic assumptions used for every projection
    #[serde(default)]
    pub assumptions: Assumptions,

    /// Display currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            assumptions: Assumptions::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CoreflowPaths) -> Result<Self, CoreflowError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CoreflowError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            CoreflowError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.assumptions.validate().map_err(|e| {
            CoreflowError::Config(format!("Invalid assumptions in settings file: {}", e))
        })?;

        tracing::info!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CoreflowPaths) -> Result<(), CoreflowError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CoreflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CoreflowError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// Update a single setting from its textual form
    ///
    /// The change is validated before it is applied; on error the settings
    /// are left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreflowError> {
        let mut updated = self.clone();

        match key {
            "return" => updated.assumptions.annual_return_rate = parse_value(key, value)?,
            "inflation" => updated.assumptions.annual_inflation_rate = parse_value(key, value)?,
            "horizon" => updated.assumptions.horizon_months = parse_value(key, value)?,
            "splurge-years" => updated.assumptions.splurge_years = parse_value(key, value)?,
            "currency" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(CoreflowError::Validation(
                        "currency symbol cannot be empty".into(),
                    ));
                }
                updated.currency_symbol = symbol.to_string();
            }
            _ => {
                return Err(CoreflowError::Config(format!(
                    "Unknown setting '{}' (expected one of: {})",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }

        updated.assumptions.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CoreflowError> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreflowError::Validation(format!("Invalid value for '{}': {}", key, value)))
}
