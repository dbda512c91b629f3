//! What-if scenario models

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a scenario ends up ahead of or behind its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Gain,
    Loss,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gain => f.pad("gain"),
            Self::Loss => f.pad("loss"),
        }
    }
}

/// Difference between a modified projection and its baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    /// Final nominal balance of the baseline projection
    pub baseline_final: f64,
    /// Final nominal balance of the modified projection
    pub scenario_final: f64,
    /// `scenario_final - baseline_final`
    pub amount: f64,
    pub direction: Direction,
}

impl ScenarioDelta {
    /// Diff two final balances; a zero difference counts as a gain
    pub fn between(baseline_final: f64, scenario_final: f64) -> Self {
        let amount = scenario_final - baseline_final;
        let direction = if amount >= 0.0 {
            Direction::Gain
        } else {
            Direction::Loss
        };
        Self {
            baseline_final,
            scenario_final,
            amount,
            direction,
        }
    }

    /// Unsigned size of the difference
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Whether the scenario changes nothing
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

/// A budget after moving percentage points between wants and savings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedBudget {
    /// Adjustment the caller asked for, in percentage points of income
    pub requested_delta_pct: f64,
    /// Adjustment actually applied after clamping
    pub applied_delta_pct: f64,
    pub savings_pct: f64,
    pub wants_pct: f64,
    pub savings: Money,
    pub wants: Money,
}

impl AdjustedBudget {
    /// Whether the requested adjustment had to be clamped
    pub fn was_clamped(&self) -> bool {
        self.requested_delta_pct != self.applied_delta_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_direction() {
        let gain = ScenarioDelta::between(1000.0, 1500.0);
        assert_eq!(gain.amount, 500.0);
        assert_eq!(gain.direction, Direction::Gain);

        let loss = ScenarioDelta::between(1500.0, 1000.0);
        assert_eq!(loss.amount, -500.0);
        assert_eq!(loss.magnitude(), 500.0);
        assert_eq!(loss.direction, Direction::Loss);
    }

    #[test]
    fn test_zero_delta_is_gain() {
        let delta = ScenarioDelta::between(1234.5, 1234.5);
        assert!(delta.is_zero());
        assert_eq!(delta.magnitude(), 0.0);
        assert_eq!(delta.direction, Direction::Gain);
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Direction::Loss).unwrap(), "\"loss\"");
    }
}
