//! Wealth projection model

use serde::{Deserialize, Serialize};

/// Projected balances at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Month number, starting at 1
    pub month: u32,
    /// Balance in future money
    pub nominal_balance: f64,
    /// Balance discounted by cumulative inflation (today's money)
    pub real_balance: f64,
}

/// Month-by-month trajectory of a recurring contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub monthly_contribution: f64,
    pub annual_return_rate: f64,
    pub annual_inflation_rate: f64,
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    /// Number of projected months
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series covers zero months
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The last projected month, if any
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Nominal balance after the last month (0 for an empty series)
    pub fn final_nominal(&self) -> f64 {
        self.final_point().map_or(0.0, |p| p.nominal_balance)
    }

    /// Real balance after the last month (0 for an empty series)
    pub fn final_real(&self) -> f64 {
        self.final_point().map_or(0.0, |p| p.real_balance)
    }

    /// Total amount paid in over the horizon
    pub fn total_contributed(&self) -> f64 {
        self.monthly_contribution * self.points.len() as f64
    }

    /// Nominal growth beyond what was contributed
    pub fn growth_earned(&self) -> f64 {
        self.final_nominal() - self.total_contributed()
    }

    /// Nominal balances in month order
    pub fn nominal_balances(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.nominal_balance).collect()
    }

    /// Real balances in month order
    pub fn real_balances(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.real_balance).collect()
    }
}
