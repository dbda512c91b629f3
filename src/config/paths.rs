//! Path management for CoreFlow
//!
//! CoreFlow persists nothing but its settings file and any reports the user
//! explicitly exports.
//!
//! ## Path Resolution Order
//!
//! 1. `COREFLOW_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/coreflow` or `~/.config/coreflow`
//! 3. Windows: `%APPDATA%\coreflow`

use std::path::PathBuf;

use crate::error::CoreflowError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "COREFLOW_CONFIG_DIR";

/// Manages all paths used by CoreFlow
#[derive(Debug, Clone)]
pub struct CoreflowPaths {
    base_dir: PathBuf,
}

impl CoreflowPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, CoreflowError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CoreflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/coreflow/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), CoreflowError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            CoreflowError::Io(format!("Failed to create config directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CoreflowError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CoreflowError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("coreflow"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CoreflowError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CoreflowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("coreflow"))
}
