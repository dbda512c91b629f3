//! Economic assumptions
//!
//! Fixed annual return and inflation rates plus the horizons the engine
//! projects over. All of them can be overridden from the settings file or
//! the command line.

use serde::{Deserialize, Serialize};

use crate::error::{CoreflowError, CoreflowResult};

/// Assumed annual return on invested savings (7%)
pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.07;

/// Assumed annual inflation (6%)
pub const DEFAULT_ANNUAL_INFLATION_RATE: f64 = 0.06;

/// Default projection horizon in months
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Default horizon for opportunity-cost estimates, in years
pub const DEFAULT_SPLURGE_YEARS: u32 = 5;

/// Lowest accepted annual rate (-100%)
pub const MIN_ANNUAL_RATE: f64 = -1.0;

/// Highest accepted annual rate (+100%)
pub const MAX_ANNUAL_RATE: f64 = 1.0;

/// Longest accepted projection, in months (100 years)
pub const MAX_PROJECTION_MONTHS: u32 = 1200;

/// Check that an annual rate is finite and within `[MIN_ANNUAL_RATE, MAX_ANNUAL_RATE]`
pub fn validate_rate(name: &'static str, value: f64) -> CoreflowResult<()> {
    if value.is_finite() && (MIN_ANNUAL_RATE..=MAX_ANNUAL_RATE).contains(&value) {
        Ok(())
    } else {
        Err(CoreflowError::InvalidRate { name, value })
    }
}

/// Check that a projection length is within bounds
pub fn validate_months(months: u32) -> CoreflowResult<()> {
    if months > MAX_PROJECTION_MONTHS {
        return Err(CoreflowError::Validation(format!(
            "projection of {} months exceeds the maximum of {}",
            months, MAX_PROJECTION_MONTHS
        )));
    }
    Ok(())
}

/// The economic constants a calculation runs under
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    #[serde(default = "default_return_rate")]
    pub annual_return_rate: f64,

    #[serde(default = "default_inflation_rate")]
    pub annual_inflation_rate: f64,

    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    #[serde(default = "default_splurge_years")]
    pub splurge_years: u32,
}

fn default_return_rate() -> f64 {
    DEFAULT_ANNUAL_RETURN_RATE
}

fn default_inflation_rate() -> f64 {
    DEFAULT_ANNUAL_INFLATION_RATE
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_splurge_years() -> u32 {
    DEFAULT_SPLURGE_YEARS
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            annual_return_rate: DEFAULT_ANNUAL_RETURN_RATE,
            annual_inflation_rate: DEFAULT_ANNUAL_INFLATION_RATE,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            splurge_years: DEFAULT_SPLURGE_YEARS,
        }
    }
}

impl Assumptions {
    /// Override the annual return rate
    pub fn with_return_rate(mut self, rate: f64) -> Self {
        self.annual_return_rate = rate;
        self
    }

    /// Override the annual inflation rate
    pub fn with_inflation_rate(mut self, rate: f64) -> Self {
        self.annual_inflation_rate = rate;
        self
    }

    /// Validate every field
    pub fn validate(&self) -> CoreflowResult<()> {
        validate_rate("return", self.annual_return_rate)?;
        validate_rate("inflation", self.annual_inflation_rate)?;

        if self.horizon_months == 0 {
            return Err(CoreflowError::Validation(
                "projection horizon must be at least one month".into(),
            ));
        }
        validate_months(self.horizon_months)?;
        validate_months(self.splurge_years.saturating_mul(12))?;

        Ok(())
    }
}
