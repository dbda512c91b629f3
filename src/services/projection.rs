//! Wealth projection service
//!
//! Simulates a recurring monthly contribution compounding at a fixed annual
//! return, and discounts each month's balance by cumulative inflation.
//!
//! The balance is accumulated month by month rather than through the
//! closed-form annuity formula:
//!
//! ```text
//! nominal(0) = 0
//! nominal(m) = nominal(m-1) * (1 + return/12) + contribution
//! real(m)    = nominal(m) / (1 + inflation/12)^m
//! ```

use crate::config::assumptions::{validate_months, validate_rate};
use crate::config::Assumptions;
use crate::error::{CoreflowError, CoreflowResult};
use crate::models::{ProjectionPoint, ProjectionSeries};

/// Projects savings growth over a fixed horizon
#[derive(Debug, Clone, Copy, Default)]
pub struct WealthProjector;

impl WealthProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project a monthly contribution over `months` months
    ///
    /// Zero or negative contributions and zero rates are valid; a negative
    /// contribution simulates a withdrawal plan.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` for a rate outside `[-1.0, 1.0]` or not finite,
    /// and `Validation` for a non-finite contribution or an over-long horizon.
    pub fn project(
        &self,
        monthly_savings: f64,
        months: u32,
        annual_return_rate: f64,
        annual_inflation_rate: f64,
    ) -> CoreflowResult<ProjectionSeries> {
        if !monthly_savings.is_finite() {
            return Err(CoreflowError::Validation(format!(
                "monthly contribution must be a finite amount, got {}",
                monthly_savings
            )));
        }
        validate_rate("return", annual_return_rate)?;
        validate_rate("inflation", annual_inflation_rate)?;
        validate_months(months)?;

        let monthly_return = 1.0 + annual_return_rate / 12.0;
        let monthly_inflation = 1.0 + annual_inflation_rate / 12.0;

        let mut points = Vec::with_capacity(months as usize);
        let mut nominal = 0.0_f64;
        let mut price_index = 1.0_f64;

        for month in 1..=months {
            nominal = nominal * monthly_return + monthly_savings;
            price_index *= monthly_inflation;

            points.push(ProjectionPoint {
                month,
                nominal_balance: nominal,
                real_balance: nominal / price_index,
            });
        }

        let series = ProjectionSeries {
            monthly_contribution: monthly_savings,
            annual_return_rate,
            annual_inflation_rate,
            points,
        };

        tracing::debug!(
            monthly_savings,
            months,
            annual_return_rate,
            annual_inflation_rate,
            final_nominal = series.final_nominal(),
            final_real = series.final_real(),
            "projected wealth"
        );

        Ok(series)
    }

    /// Project a contribution over the default horizon and rates
    pub fn project_with(
        &self,
        monthly_savings: f64,
        assumptions: &Assumptions,
    ) -> CoreflowResult<ProjectionSeries> {
        self.project(
            monthly_savings,
            assumptions.horizon_months,
            assumptions.annual_return_rate,
            assumptions.annual_inflation_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(savings: f64, months: u32, r: f64, i: f64) -> ProjectionSeries {
        WealthProjector::new().project(savings, months, r, i).unwrap()
    }

    #[test]
    fn test_zero_savings_is_flat_zero() {
        for (r, i) in [(0.0, 0.0), (0.07, 0.06), (0.5, -0.2), (-0.3, 0.9)] {
            let series = project(0.0, 12, r, i);
            assert_eq!(series.len(), 12);
            assert!(series.points.iter().all(|p| p.nominal_balance == 0.0));
            assert!(series.points.iter().all(|p| p.real_balance == 0.0));
        }
    }

    #[test]
    fn test_no_growth_is_sum_of_contributions() {
        let series = project(150.0, 12, 0.0, 0.0);
        assert_eq!(series.final_nominal(), 12.0 * 150.0);
        assert_eq!(series.final_real(), 12.0 * 150.0);
        assert_eq!(series.growth_earned(), 0.0);

        for (idx, point) in series.points.iter().enumerate() {
            assert_eq!(point.month, idx as u32 + 1);
            assert_eq!(point.nominal_balance, 150.0 * (idx as f64 + 1.0));
        }
    }

    #[test]
    fn test_strictly_increasing_for_positive_savings() {
        for r in [0.0, 0.01, 0.07, 0.5] {
            let balances = project(250.0, 24, r, 0.03).nominal_balances();
            for pair in balances.windows(2) {
                assert!(pair[1] > pair[0], "r = {}: {:?}", r, pair);
            }
        }
    }

    #[test]
    fn test_student_disciplined_example() {
        // Student / Disciplined / 1000 saves 250 a month
        let series = project(250.0, 12, 0.06, 0.03);
        let nominal = series.nominal_balances();
        let real = series.real_balances();

        for pair in nominal.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        for m in 0..12 {
            assert!(real[m] < nominal[m]);
        }
        for m in 1..12 {
            assert!(real[m] - real[m - 1] < nominal[m] - nominal[m - 1]);
        }
    }

    #[test]
    fn test_matches_annuity_formula() {
        let r: f64 = 0.07 / 12.0;
        let expected = 200.0 * ((1.0 + r).powi(60) - 1.0) / r;
        let series = project(200.0, 60, 0.07, 0.0);
        assert!((series.final_nominal() - expected).abs() < 1e-6);
        assert_eq!(series.final_real(), series.final_nominal());
    }

    #[test]
    fn test_real_balance_discounting() {
        let series = project(100.0, 2, 0.0, 0.12);
        // Month 1: 100 / 1.01, month 2: 200 / 1.01^2
        assert!((series.points[0].real_balance - 100.0 / 1.01).abs() < 1e-9);
        assert!((series.points[1].real_balance - 200.0 / 1.0201).abs() < 1e-9);
    }

    #[test]
    fn test_negative_savings_allowed() {
        let series = project(-100.0, 12, 0.05, 0.02);
        assert!(series.final_nominal() < 0.0);
        for pair in series.nominal_balances().windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_zero_months_is_empty() {
        let series = project(500.0, 0, 0.07, 0.06);
        assert!(series.is_empty());
        assert_eq!(series.final_nominal(), 0.0);
        assert!(series.final_point().is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        let projector = WealthProjector::new();

        let err = projector.project(100.0, 12, -1.5, 0.03).unwrap_err();
        assert!(matches!(err, CoreflowError::InvalidRate { name: "return", .. }));

        let err = projector.project(100.0, 12, 0.05, f64::NAN).unwrap_err();
        assert!(matches!(err, CoreflowError::InvalidRate { name: "inflation", .. }));

        assert!(projector.project(f64::INFINITY, 12, 0.05, 0.03).is_err());
        assert!(projector.project(100.0, 5000, 0.05, 0.03).is_err());
    }

    #[test]
    fn test_project_with_assumptions() {
        let assumptions = Assumptions::default();
        let series = WealthProjector::new()
            .project_with(1000.0, &assumptions)
            .unwrap();
        assert_eq!(series.len(), 12);
        assert_eq!(series.annual_return_rate, 0.07);
        assert_eq!(series.annual_inflation_rate, 0.06);
    }
}
