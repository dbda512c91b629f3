//! Narrative summary generator
//!
//! Builds a short plain-language summary from the other components'
//! outputs. The opening sentence is keyed by mood and grade band, the advice
//! sentence by the budget's weakest point, and the closing sentence cites
//! the projected balance.

use crate::models::{BudgetResult, Grade, Lifestyle, Money, Mood, Profile, ProjectionSeries, Scorecard};
use crate::services::scorecard::RECOMMENDED_SAVINGS_RATE;

/// Wants share above which the narrative suggests trimming wants
pub const HIGH_WANTS_RATE: f64 = 0.35;

/// Coarse grouping of grades for choosing a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GradeBand {
    Strong,
    Fair,
    Weak,
}

impl From<Grade> for GradeBand {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::A | Grade::B => Self::Strong,
            Grade::C => Self::Fair,
            Grade::D | Grade::F => Self::Weak,
        }
    }
}

/// Formats summaries using a display currency symbol
pub struct NarrativeGenerator<'a> {
    currency_symbol: &'a str,
}

impl<'a> NarrativeGenerator<'a> {
    pub fn new(currency_symbol: &'a str) -> Self {
        Self { currency_symbol }
    }

    /// Summarize a profile's budget, scorecard and projection
    pub fn narrate(
        &self,
        profile: &Profile,
        budget: &BudgetResult,
        scorecard: &Scorecard,
        projection: &ProjectionSeries,
    ) -> String {
        let mut narrative = self.opening(profile, scorecard);
        narrative.push(' ');
        narrative.push_str(&self.advice(profile, budget, scorecard));
        narrative.push(' ');
        narrative.push_str(&self.closing(projection));
        narrative
    }

    fn opening(&self, profile: &Profile, scorecard: &Scorecard) -> String {
        let lifestyle = article_and_label(profile.lifestyle);
        let rate = format!("{:.1}%", scorecard.savings_rate * 100.0);

        match (profile.mood, GradeBand::from(scorecard.grade)) {
            (Mood::Disciplined, GradeBand::Strong) => format!(
                "As {}, your financial discipline is impressive! A savings rate of {} puts you in a strong position.",
                lifestyle, rate
            ),
            (Mood::Disciplined, GradeBand::Fair) => format!(
                "As {}, your discipline is paying off. A savings rate of {} is a solid foundation.",
                lifestyle, rate
            ),
            (Mood::Disciplined, GradeBand::Weak) => format!(
                "As {}, your intentions are good, but a savings rate of {} still needs work.",
                lifestyle, rate
            ),
            (Mood::Balanced, GradeBand::Strong) => format!(
                "As {}, you're striking a healthy balance. A savings rate of {} keeps you on track.",
                lifestyle, rate
            ),
            (Mood::Balanced, GradeBand::Fair) => format!(
                "You're building a solid foundation as {}. Your savings rate of {} is a good start.",
                lifestyle, rate
            ),
            (Mood::Balanced, GradeBand::Weak) => format!(
                "As {}, your current budget needs attention. A savings rate of {} is a critical area to improve.",
                lifestyle, rate
            ),
            (Mood::Splurge, GradeBand::Strong) => format!(
                "As {}, you can afford a little indulgence: even in a splurge month you save {}.",
                lifestyle, rate
            ),
            (Mood::Splurge, GradeBand::Fair) => format!(
                "As {}, this splurge is manageable, but a savings rate of {} leaves little cushion.",
                lifestyle, rate
            ),
            (Mood::Splurge, GradeBand::Weak) => format!(
                "As {}, this splurge is costing your future self. A savings rate of {} is critically low.",
                lifestyle, rate
            ),
        }
    }

    fn advice(&self, profile: &Profile, budget: &BudgetResult, scorecard: &Scorecard) -> String {
        let wants_rate = budget.wants_rate();

        if profile.lifestyle == Lifestyle::Freelancer && !scorecard.emergency_fund_complete() {
            "For freelancers, a robust emergency fund is key; prioritize building 3-6 months of savings."
                .to_string()
        } else if wants_rate > HIGH_WANTS_RATE {
            format!(
                "The quickest way to boost your savings is to review your 'Wants' (currently at {:.0}%) and reallocate funds to your goals.",
                wants_rate * 100.0
            )
        } else if scorecard.savings_rate < RECOMMENDED_SAVINGS_RATE && !scorecard.grade.is_strong() {
            let target = budget.income.percent_f64(RECOMMENDED_SAVINGS_RATE * 100.0);
            let shortfall = (target - budget.savings).max_zero();
            format!(
                "Consider boosting your monthly savings by just {} to hit the recommended {:.0}% target.",
                shortfall.format_rounded(self.currency_symbol),
                RECOMMENDED_SAVINGS_RATE * 100.0
            )
        } else {
            "Keep up the consistent effort to see significant long-term growth.".to_string()
        }
    }

    fn closing(&self, projection: &ProjectionSeries) -> String {
        let nominal = Money::from_f64(projection.final_nominal());
        if !nominal.is_positive() {
            return "Start saving to see your wealth projection grow.".to_string();
        }

        let real = Money::from_f64(projection.final_real());
        format!(
            "At this pace you could hold {} after {} months, worth {} in today's money.",
            nominal.format_rounded(self.currency_symbol),
            projection.len(),
            real.format_rounded(self.currency_symbol)
        )
    }
}

fn article_and_label(lifestyle: Lifestyle) -> String {
    format!("a {}", lifestyle.label())
}
