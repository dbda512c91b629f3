//! Financial Plan Report
//!
//! Runs the full calculation for one profile (allocation, projection,
//! scorecard, mood impact and narrative) and renders it for the terminal.

use serde::{Deserialize, Serialize};

use crate::config::Assumptions;
use crate::display::{double_separator, format_bar, format_delta, format_percentage, separator};
use crate::engine::Engine;
use crate::error::CoreflowResult;
use crate::models::{
    BudgetResult, Direction, Money, Mood, Profile, ProjectionSeries, ScenarioDelta, Scorecard,
};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Everything the engine computes for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub profile: Profile,
    pub assumptions: Assumptions,
    pub budget: BudgetResult,
    pub projection: ProjectionSeries,
    pub scorecard: Scorecard,
    /// Projected difference between the profile's mood and Balanced
    pub mood_impact: ScenarioDelta,
    pub narrative: String,
}

impl PlanReport {
    /// Generate a plan report
    pub fn generate(
        engine: &Engine,
        profile: &Profile,
        currency_symbol: &str,
    ) -> CoreflowResult<Self> {
        let budget = engine.allocate(profile)?;
        let projection = engine.project_savings(budget.savings.to_f64())?;
        let scorecard = engine.scorecard(&budget, profile);
        let mood_impact = engine.mood_impact(profile)?;
        let narrative = engine.narrate(profile, &budget, &scorecard, &projection, currency_symbol);

        tracing::info!(
            lifestyle = %profile.lifestyle,
            mood = %profile.mood,
            grade = %scorecard.grade,
            "generated plan report"
        );

        Ok(Self {
            profile: *profile,
            assumptions: *engine.assumptions(),
            budget,
            projection,
            scorecard,
            mood_impact,
            narrative,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let money = |amount: Money| amount.format_with_symbol(symbol);
        let rounded = |value: f64| Money::from_f64(value).format_rounded(symbol);

        // Header
        output.push_str("Financial Plan\n");
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Profile: {} / {} / {} per month\n\n",
            self.profile.lifestyle,
            self.profile.mood,
            money(self.budget.income)
        ));

        // Summary
        output.push_str("Summary\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&wrap(&self.narrative, WIDTH));
        output.push_str("\n\n");

        // Allocation
        output.push_str("Budget Allocation\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let rows = [
            ("Necessities", self.budget.rule.necessities_pct, self.budget.necessities),
            ("Wants", self.budget.rule.wants_pct, self.budget.wants),
            ("Savings", self.budget.rule.savings_pct, self.budget.savings),
        ];
        for (label, pct, amount) in rows {
            output.push_str(&format!(
                "{:<12} {:>4}% {:>16}  {}\n",
                label,
                pct,
                money(amount),
                format_bar(f64::from(pct), 100.0, BAR_WIDTH)
            ));
        }
        if !self.budget.fixed_commitments.is_zero() {
            output.push_str(&format!(
                "  Fixed commitments {:>27}\n",
                money(self.budget.fixed_commitments)
            ));
            output.push_str(&format!(
                "  Flexible necessities {:>24}\n",
                money(self.budget.flex_necessities)
            ));
            if self.budget.commitments_exceed_necessities() {
                output.push_str("  ⚠️  Fixed commitments exceed the necessities budget.\n");
            }
        }
        output.push('\n');

        // Mood impact
        output.push_str("Mood Impact\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        match (self.profile.mood, self.mood_impact.direction) {
            (Mood::Balanced, _) => output.push_str("You're on a balanced path.\n"),
            (_, Direction::Gain) => output.push_str(&format!(
                "✅ Extra wealth gained in {} months: {}\n",
                self.projection.len(),
                format_delta(&self.mood_impact, symbol)
            )),
            (_, Direction::Loss) => output.push_str(&format!(
                "⚠️  Future savings lost in {} months: {}\n",
                self.projection.len(),
                format_delta(&self.mood_impact, symbol)
            )),
        }
        output.push('\n');

        // Projection
        output.push_str(&format!(
            "{}-Month Wealth Projection ({} return, {} inflation)\n",
            self.projection.len(),
            format_percentage(self.assumptions.annual_return_rate),
            format_percentage(self.assumptions.annual_inflation_rate)
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.projection.final_nominal() > 0.0 {
            output.push_str(&format!("{:>5} {:>16} {:>16}\n", "Month", "Nominal", "Real"));
            for point in &self.projection.points {
                output.push_str(&format!(
                    "{:>5} {:>16} {:>16}\n",
                    point.month,
                    rounded(point.nominal_balance),
                    rounded(point.real_balance)
                ));
            }
        } else {
            output.push_str("Start saving to see your wealth projection.\n");
        }
        output.push('\n');

        // Scorecard
        output.push_str("Financial Fitness Scorecard\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Grade:          {} {}\n",
            self.scorecard.grade,
            self.scorecard.grade.emoji()
        ));
        output.push_str(&format!(
            "Savings rate:   {}\n",
            format_percentage(self.scorecard.savings_rate)
        ));
        output.push_str(&format!(
            "Coverage:       {:.1} months of necessities per year of saving\n",
            self.scorecard.coverage_months
        ));
        output.push_str(&format!(
            "Emergency fund: {} {}\n",
            format_bar(self.scorecard.emergency_fund_progress, 1.0, BAR_WIDTH),
            format_percentage(self.scorecard.emergency_fund_progress)
        ));
        output.push_str(&format!("💡 Insight: {}\n", self.scorecard.comment()));

        output
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, Lifestyle};

    fn report(mood: Mood) -> PlanReport {
        let profile = Profile::new(Lifestyle::WorkingProfessional, mood, 50_000.0)
            .with_fixed_commitments(Money::from_units_cents(15_000, 0));
        PlanReport::generate(&Engine::default(), &profile, "₹").unwrap()
    }

    #[test]
    fn test_generate() {
        let report = report(Mood::Disciplined);
        assert_eq!(report.budget.savings, Money::from_units_cents(15_000, 0));
        assert_eq!(report.projection.len(), 12);
        assert_eq!(report.scorecard.grade, Grade::A);
        assert_eq!(report.mood_impact.direction, Direction::Gain);
        assert!(!report.narrative.is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_income() {
        let profile = Profile::new(Lifestyle::Student, Mood::Balanced, -5.0);
        assert!(PlanReport::generate(&Engine::default(), &profile, "₹").is_err());
    }

    #[test]
    fn test_format_terminal() {
        let output = report(Mood::Splurge).format_terminal("₹");

        assert!(output.contains("Financial Plan"));
        assert!(output.contains("Working Professional / Splurge / ₹50,000.00 per month"));
        assert!(output.contains("Fixed commitments"));
        assert!(output.contains("Future savings lost in 12 months"));
        assert!(output.contains("12-Month Wealth Projection (7.0% return, 6.0% inflation)"));
        assert!(output.contains("Grade:          D"));
    }

    #[test]
    fn test_format_terminal_balanced() {
        let output = report(Mood::Balanced).format_terminal("$");
        assert!(output.contains("You're on a balanced path."));
    }

    #[test]
    fn test_wrap() {
        let wrapped = wrap("one two three four five", 9);
        assert_eq!(wrapped, "one two\nthree\nfour five");
    }
}
