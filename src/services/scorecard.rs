//! Financial scorecard
//!
//! Grades a budget on two ratios:
//!
//! - **savings rate**: savings as a fraction of income, banded A ≥ 25%,
//!   B ≥ 20%, C ≥ 15%, D ≥ 10%, F below.
//! - **coverage**: months of necessity spending that one projection horizon
//!   (12 months) of savings would cover. An A also needs at least six months
//!   of coverage; a budget in the A savings band with less is graded B.
//!
//! The bands are checked top-down, so every pair of ratios maps to exactly
//! one grade.
//!
//! A budget is graded on its allocation rule's whole-number percentages, so
//! a given lifestyle and mood always earns the same grade whatever the
//! income. The ratios reported alongside the grade come from the rounded
//! amounts.

use crate::models::{AllocationRule, BudgetResult, Grade, Profile, Scorecard};

/// Minimum savings rate for an A
pub const GRADE_A_MIN_SAVINGS_RATE: f64 = 0.25;
/// Minimum savings rate for a B
pub const GRADE_B_MIN_SAVINGS_RATE: f64 = 0.20;
/// Minimum savings rate for a C
pub const GRADE_C_MIN_SAVINGS_RATE: f64 = 0.15;
/// Minimum savings rate for a D
pub const GRADE_D_MIN_SAVINGS_RATE: f64 = 0.10;

/// Minimum coverage, in months, for an A
pub const GRADE_A_MIN_COVERAGE_MONTHS: f64 = 6.0;

/// Months of saving the coverage ratio is measured over
pub const COVERAGE_HORIZON_MONTHS: f64 = 12.0;

/// Emergency-fund goal, in months of necessities
pub const EMERGENCY_FUND_TARGET_MONTHS: f64 = 3.0;

/// Savings rate recommended to every profile
pub const RECOMMENDED_SAVINGS_RATE: f64 = 0.20;

/// Map the two ratios to a grade
///
/// NaN ratios fail every comparison and land in F.
pub fn grade_for(savings_rate: f64, coverage_months: f64) -> Grade {
    if savings_rate >= GRADE_A_MIN_SAVINGS_RATE {
        if coverage_months >= GRADE_A_MIN_COVERAGE_MONTHS {
            Grade::A
        } else {
            Grade::B
        }
    } else if savings_rate >= GRADE_B_MIN_SAVINGS_RATE {
        Grade::B
    } else if savings_rate >= GRADE_C_MIN_SAVINGS_RATE {
        Grade::C
    } else if savings_rate >= GRADE_D_MIN_SAVINGS_RATE {
        Grade::D
    } else {
        Grade::F
    }
}

/// Grade an allocation rule from its exact percentages
pub fn grade_for_rule(rule: &AllocationRule) -> Grade {
    let savings_pct = f64::from(rule.savings_pct);
    let savings_rate = savings_pct / 100.0;
    let coverage_months = if rule.necessities_pct > 0 {
        savings_pct * COVERAGE_HORIZON_MONTHS / f64::from(rule.necessities_pct)
    } else {
        f64::INFINITY
    };

    grade_for(savings_rate, coverage_months)
}

/// Grade a budget for a profile
pub fn grade(budget: &BudgetResult, profile: &Profile) -> Grade {
    evaluate(budget, profile).grade
}

/// Grade a budget and report the ratios behind the grade
///
/// Everything is derived from the budget, whose income is the profile's
/// income rounded to the cent.
pub fn evaluate(budget: &BudgetResult, _profile: &Profile) -> Scorecard {
    let savings = budget.savings.to_f64();
    let necessities = budget.necessities.to_f64();
    let savings_rate = budget.savings_rate();

    let coverage_months = if necessities > 0.0 {
        savings * COVERAGE_HORIZON_MONTHS / necessities
    } else {
        f64::INFINITY
    };

    let emergency_fund_goal = necessities * EMERGENCY_FUND_TARGET_MONTHS;
    let emergency_fund_progress = if emergency_fund_goal > 0.0 {
        (savings / emergency_fund_goal).clamp(0.0, 1.0)
    } else {
        1.0
    };

    Scorecard {
        grade: grade_for_rule(&budget.rule),
        savings_rate,
        coverage_months,
        emergency_fund_progress,
    }
}
