//! Engine facade
//!
//! Bundles a validated set of [`Assumptions`] and exposes the whole
//! calculation surface behind one value. The engine holds no mutable state
//! and can be shared freely across threads.

use crate::config::Assumptions;
use crate::error::CoreflowResult;
use crate::models::{
    AdjustedBudget, BudgetResult, Grade, Mood, Profile, ProjectionSeries, ScenarioDelta, Scorecard,
};
use crate::services::{
    scorecard, BudgetAllocator, NarrativeGenerator, ScenarioSimulator, WealthProjector,
};

/// Entry point for every calculation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Engine {
    assumptions: Assumptions,
}

impl Engine {
    /// Create an engine, validating the assumptions up front
    pub fn new(assumptions: Assumptions) -> CoreflowResult<Self> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Split a profile's income into necessities, wants and savings
    pub fn allocate(&self, profile: &Profile) -> CoreflowResult<BudgetResult> {
        BudgetAllocator::new().allocate(profile)
    }

    /// Project a monthly contribution with explicit parameters
    pub fn project(
        &self,
        monthly_savings: f64,
        months: u32,
        annual_return_rate: f64,
        annual_inflation_rate: f64,
    ) -> CoreflowResult<ProjectionSeries> {
        WealthProjector::new().project(
            monthly_savings,
            months,
            annual_return_rate,
            annual_inflation_rate,
        )
    }

    /// Project a monthly contribution over the configured horizon and rates
    pub fn project_savings(&self, monthly_savings: f64) -> CoreflowResult<ProjectionSeries> {
        WealthProjector::new().project_with(monthly_savings, &self.assumptions)
    }

    pub fn simulate_mood_change(
        &self,
        profile: &Profile,
        new_mood: Mood,
    ) -> CoreflowResult<ScenarioDelta> {
        self.simulator().simulate_mood_change(profile, new_mood)
    }

    pub fn simulate_savings_adjustment(
        &self,
        profile: &Profile,
        delta_pct: f64,
    ) -> CoreflowResult<ScenarioDelta> {
        self.simulator()
            .simulate_savings_adjustment(profile, delta_pct)
    }

    pub fn simulate_recurring_splurge(
        &self,
        monthly_amount: f64,
        years: u32,
        annual_return_rate: f64,
    ) -> CoreflowResult<f64> {
        self.simulator()
            .simulate_recurring_splurge(monthly_amount, years, annual_return_rate)
    }

    /// Opportunity cost of a splurge over the configured horizon
    pub fn splurge_cost(&self, monthly_amount: f64) -> CoreflowResult<f64> {
        self.simulator().splurge_cost(monthly_amount)
    }

    /// Delta of the profile's mood against a Balanced mood
    pub fn mood_impact(&self, profile: &Profile) -> CoreflowResult<ScenarioDelta> {
        self.simulator().mood_impact(profile)
    }

    pub fn adjusted_budget(
        &self,
        profile: &Profile,
        delta_pct: f64,
    ) -> CoreflowResult<AdjustedBudget> {
        self.simulator().adjusted_budget(profile, delta_pct)
    }

    pub fn grade(&self, budget: &BudgetResult, profile: &Profile) -> Grade {
        scorecard::grade(budget, profile)
    }

    pub fn scorecard(&self, budget: &BudgetResult, profile: &Profile) -> Scorecard {
        scorecard::evaluate(budget, profile)
    }

    pub fn narrate(
        &self,
        profile: &Profile,
        budget: &BudgetResult,
        scorecard: &Scorecard,
        projection: &ProjectionSeries,
        currency_symbol: &str,
    ) -> String {
        NarrativeGenerator::new(currency_symbol).narrate(profile, budget, scorecard, projection)
    }

    fn simulator(&self) -> ScenarioSimulator<'_> {
        ScenarioSimulator::new(&self.assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lifestyle;

    #[test]
    fn test_rejects_invalid_assumptions() {
        let assumptions = Assumptions::default().with_return_rate(-3.0);
        assert!(Engine::new(assumptions).is_err());
    }

    #[test]
    fn test_end_to_end_flow() {
        let engine = Engine::default();
        let profile = Profile::new(Lifestyle::Student, Mood::Disciplined, 1000.0);

        let budget = engine.allocate(&profile).unwrap();
        let projection = engine.project_savings(budget.savings.to_f64()).unwrap();
        let card = engine.scorecard(&budget, &profile);
        let text = engine.narrate(&profile, &budget, &card, &projection, "$");

        assert_eq!(projection.len(), 12);
        assert_eq!(engine.grade(&budget, &profile), card.grade);
        assert!(text.contains("Student"));
        assert!(text.contains('$'));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();

        let engine = Engine::default();
        let handles: Vec<_> = Mood::ALL
            .into_iter()
            .map(|mood| {
                std::thread::spawn(move || {
                    let profile = Profile::new(Lifestyle::Homemaker, mood, 30_000.0);
                    engine.mood_impact(&profile).unwrap().amount
                })
            })
            .collect();

        let amounts: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(amounts[0] > 0.0);
        assert_eq!(amounts[1], 0.0);
        assert!(amounts[2] < 0.0);
    }
}
