//! What-if scenario service
//!
//! Every scenario re-runs the allocator and projector with one input changed
//! and diffs the final nominal balance against the unchanged baseline.
//!
//! Savings adjustments only move percentage points between wants and
//! savings; necessities are never touched. The requested shift is clamped to
//! `[-savings_pct, +wants_pct]` so neither category goes negative.

use crate::config::Assumptions;
use crate::error::{CoreflowError, CoreflowResult};
use crate::models::{AdjustedBudget, Mood, Profile, ScenarioDelta};
use crate::services::{BudgetAllocator, WealthProjector};

/// Runs what-if comparisons under a fixed set of assumptions
pub struct ScenarioSimulator<'a> {
    assumptions: &'a Assumptions,
    allocator: BudgetAllocator,
    projector: WealthProjector,
}

impl<'a> ScenarioSimulator<'a> {
    /// Create a new scenario simulator
    pub fn new(assumptions: &'a Assumptions) -> Self {
        Self {
            assumptions,
            allocator: BudgetAllocator::new(),
            projector: WealthProjector::new(),
        }
    }

    /// Compare the profile's own mood against `new_mood`
    ///
    /// Lifestyle and income stay fixed. A positive delta means the new mood
    /// ends the horizon with more money.
    pub fn simulate_mood_change(
        &self,
        profile: &Profile,
        new_mood: Mood,
    ) -> CoreflowResult<ScenarioDelta> {
        let baseline = self.final_balance_for(profile)?;
        let scenario = self.final_balance_for(&profile.with_mood(new_mood))?;
        let delta = ScenarioDelta::between(baseline, scenario);

        tracing::debug!(
            from = %profile.mood,
            to = %new_mood,
            amount = delta.amount,
            direction = %delta.direction,
            "simulated mood change"
        );

        Ok(delta)
    }

    /// How the profile's mood compares with a Balanced mood
    ///
    /// Disciplined shows a gain, Splurge a loss, Balanced zero.
    pub fn mood_impact(&self, profile: &Profile) -> CoreflowResult<ScenarioDelta> {
        self.simulate_mood_change(&profile.with_mood(Mood::Balanced), profile.mood)
    }

    /// Re-allocate the budget with savings shifted by `delta_pct` points
    ///
    /// Positive values move points from wants to savings, negative values
    /// move them back. The shift is clamped so neither goes below zero.
    pub fn adjusted_budget(
        &self,
        profile: &Profile,
        delta_pct: f64,
    ) -> CoreflowResult<AdjustedBudget> {
        if !delta_pct.is_finite() {
            return Err(CoreflowError::Validation(format!(
                "savings adjustment must be a finite percentage, got {}",
                delta_pct
            )));
        }

        let budget = self.allocator.allocate(profile)?;
        let savings_pct = f64::from(budget.rule.savings_pct);
        let wants_pct = f64::from(budget.rule.wants_pct);

        let applied = delta_pct.clamp(-savings_pct, wants_pct);
        if applied != delta_pct {
            tracing::warn!(
                requested = delta_pct,
                applied,
                "savings adjustment clamped to keep wants and savings non-negative"
            );
        }

        let new_savings_pct = savings_pct + applied;
        let new_wants_pct = wants_pct - applied;

        Ok(AdjustedBudget {
            requested_delta_pct: delta_pct,
            applied_delta_pct: applied,
            savings_pct: new_savings_pct,
            wants_pct: new_wants_pct,
            savings: budget.income.percent_f64(new_savings_pct),
            wants: budget.income.percent_f64(new_wants_pct),
        })
    }

    /// Compare the profile's projection with savings shifted by `delta_pct` points
    pub fn simulate_savings_adjustment(
        &self,
        profile: &Profile,
        delta_pct: f64,
    ) -> CoreflowResult<ScenarioDelta> {
        let baseline = self.final_balance_for(profile)?;
        let adjusted = self.adjusted_budget(profile, delta_pct)?;
        let scenario = self
            .projector
            .project_with(adjusted.savings.to_f64(), self.assumptions)?
            .final_nominal();
        let delta = ScenarioDelta::between(baseline, scenario);

        tracing::debug!(
            requested = delta_pct,
            applied = adjusted.applied_delta_pct,
            amount = delta.amount,
            "simulated savings adjustment"
        );

        Ok(delta)
    }

    /// Future value forgone by spending `monthly_amount` every month for `years` years
    ///
    /// This is the final nominal balance of investing the amount instead.
    /// Inflation does not enter the figure.
    pub fn simulate_recurring_splurge(
        &self,
        monthly_amount: f64,
        years: u32,
        annual_return_rate: f64,
    ) -> CoreflowResult<f64> {
        let months = years.checked_mul(12).ok_or_else(|| {
            CoreflowError::Validation(format!("splurge horizon of {} years is too long", years))
        })?;
        let opportunity_cost = self
            .projector
            .project(monthly_amount, months, annual_return_rate, 0.0)?
            .final_nominal();

        tracing::debug!(
            monthly_amount,
            years,
            opportunity_cost,
            "simulated recurring splurge"
        );

        Ok(opportunity_cost)
    }

    /// Opportunity cost over the configured horizon and return rate
    pub fn splurge_cost(&self, monthly_amount: f64) -> CoreflowResult<f64> {
        self.simulate_recurring_splurge(
            monthly_amount,
            self.assumptions.splurge_years,
            self.assumptions.annual_return_rate,
        )
    }

    fn final_balance_for(&self, profile: &Profile) -> CoreflowResult<f64> {
        let budget = self.allocator.allocate(profile)?;
        let series = self
            .projector
            .project_with(budget.savings.to_f64(), self.assumptions)?;
        Ok(series.final_nominal())
    }
}
