//! Budget result model
//!
//! The absolute monthly amounts produced by applying an allocation rule to
//! an income.

use serde::{Deserialize, Serialize};

use super::allocation::AllocationRule;
use super::money::Money;

/// Monthly amounts per budget category
///
/// Each category is rounded to the nearest cent on its own, so the three
/// amounts may differ from `income` by a one-cent residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub income: Money,
    pub rule: AllocationRule,
    pub necessities: Money,
    pub wants: Money,
    pub savings: Money,
    /// Portion of necessities already committed (rent, EMIs)
    pub fixed_commitments: Money,
    /// Necessities left after fixed commitments, never negative
    pub flex_necessities: Money,
}

impl BudgetResult {
    /// Sum of the three category amounts
    pub fn total(&self) -> Money {
        self.necessities + self.wants + self.savings
    }

    /// Difference between the allocated total and the income
    pub fn rounding_residue(&self) -> Money {
        self.total() - self.income
    }

    /// Savings as a fraction of income (0.0 - 1.0)
    pub fn savings_rate(&self) -> f64 {
        self.share_of_income(self.savings)
    }

    /// Wants as a fraction of income (0.0 - 1.0)
    pub fn wants_rate(&self) -> f64 {
        self.share_of_income(self.wants)
    }

    /// Whether fixed commitments exceed the necessities budget
    pub fn commitments_exceed_necessities(&self) -> bool {
        self.fixed_commitments > self.necessities
    }

    fn share_of_income(&self, amount: Money) -> f64 {
        if self.income.is_positive() {
            amount.cents() as f64 / self.income.cents() as f64
        } else {
            0.0
        }
    }
}
