//! Budget allocation service
//!
//! Applies the allocation rule table to a monthly income.

use crate::config::rules;
use crate::error::{CoreflowError, CoreflowResult};
use crate::models::{BudgetResult, Money, Profile};

/// Largest monthly income the allocator accepts
///
/// Keeps every cent amount, and every percentage of it, inside `i64`.
pub const MAX_MONTHLY_INCOME: f64 = 1e12;

/// Splits a monthly income into necessities, wants and savings
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetAllocator;

impl BudgetAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Allocate a profile's income according to its lifestyle and mood
    ///
    /// Income is first rounded to the cent, then each category is rounded
    /// independently. The rounding residue is left in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIncome` if income is not a positive finite amount, and
    /// `Validation` if fixed commitments are negative.
    pub fn allocate(&self, profile: &Profile) -> CoreflowResult<BudgetResult> {
        let income = validate_income(profile.monthly_income)?;

        if profile.fixed_commitments.is_negative() {
            return Err(CoreflowError::Validation(format!(
                "fixed commitments cannot be negative: {}",
                profile.fixed_commitments
            )));
        }

        let rule = rules::lookup(profile.lifestyle, profile.mood);
        let share = |pct: u8| {
            income
                .checked_percent(pct)
                .ok_or(CoreflowError::InvalidIncome(profile.monthly_income))
        };
        let necessities = share(rule.necessities_pct)?;
        let wants = share(rule.wants_pct)?;
        let savings = share(rule.savings_pct)?;
        let flex_necessities = (necessities - profile.fixed_commitments).max_zero();

        let result = BudgetResult {
            income,
            rule,
            necessities,
            wants,
            savings,
            fixed_commitments: profile.fixed_commitments,
            flex_necessities,
        };

        tracing::debug!(
            lifestyle = %profile.lifestyle,
            mood = %profile.mood,
            %income,
            %necessities,
            %wants,
            %savings,
            "allocated budget"
        );

        Ok(result)
    }
}

/// Round an income to the cent and reject anything that is not positive or
/// above [`MAX_MONTHLY_INCOME`]
pub fn validate_income(monthly_income: f64) -> CoreflowResult<Money> {
    if !monthly_income.is_finite() || monthly_income > MAX_MONTHLY_INCOME {
        return Err(CoreflowError::InvalidIncome(monthly_income));
    }

    match Money::try_from_f64(monthly_income) {
        Some(income) if income.is_positive() => Ok(income),
        _ => Err(CoreflowError::InvalidIncome(monthly_income)),
    }
}
