//! Custom error types for CoreFlow
//!
//! This module defines the error hierarchy for the engine using thiserror
//! for ergonomic error definitions. Every engine error is a local validation
//! failure; nothing here is retryable.

use thiserror::Error;

/// The main error type for CoreFlow operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreflowError {
    /// Monthly income was zero, negative or not a finite number
    #[error("Invalid income: {0} (monthly income must be greater than zero)")]
    InvalidIncome(f64),

    /// A lifestyle or mood name outside the recognized set
    #[error("Unknown {kind}: '{value}'")]
    UnknownProfile { kind: &'static str, value: String },

    /// A return or inflation rate outside the accepted bounds
    #[error("Invalid {name} rate: {value} (expected a finite annual rate between -1.0 and 1.0)")]
    InvalidRate { name: &'static str, value: f64 },

    /// Validation errors for other inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CoreflowError {
    /// Create an "unknown profile" error for a lifestyle name
    pub fn unknown_lifestyle(value: impl Into<String>) -> Self {
        Self::UnknownProfile {
            kind: "lifestyle",
            value: value.into(),
        }
    }

    /// Create an "unknown profile" error for a mood name
    pub fn unknown_mood(value: impl Into<String>) -> Self {
        Self::UnknownProfile {
            kind: "mood",
            value: value.into(),
        }
    }

    /// Check if this is an unknown-profile error
    pub fn is_unknown_profile(&self) -> bool {
        matches!(self, Self::UnknownProfile { .. })
    }

    /// Check if this error was caused by caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIncome(_)
                | Self::UnknownProfile { .. }
                | Self::InvalidRate { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for CoreflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for CoreFlow operations
pub type CoreflowResult<T> = Result<T, CoreflowError>;
