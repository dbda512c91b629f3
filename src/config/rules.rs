//! Allocation rule table
//!
//! The single source of truth for how each lifestyle splits income and how
//! each mood skews that split. Every lifestyle keeps its necessities share
//! fixed across moods; moods move ten percentage points between wants and
//! savings.
//!
//! | Lifestyle            | Disciplined | Balanced | Splurge  |
//! |----------------------|-------------|----------|----------|
//! | Student              | 50/25/25    | 50/35/15 | 50/45/5  |
//! | Working Professional | 50/20/30    | 50/30/20 | 50/40/10 |
//! | Freelancer           | 45/15/40    | 45/25/30 | 45/35/20 |
//! | Homemaker            | 60/15/25    | 60/25/15 | 60/35/5  |
//!
//! (necessities / wants / savings)

use crate::error::{CoreflowError, CoreflowResult};
use crate::models::{AllocationRule, Lifestyle, Mood};

/// Look up the split for a lifestyle and mood
pub const fn lookup(lifestyle: Lifestyle, mood: Mood) -> AllocationRule {
    let (necessities_pct, wants_pct, savings_pct) = match (lifestyle, mood) {
        (Lifestyle::Student, Mood::Disciplined) => (50, 25, 25),
        (Lifestyle::Student, Mood::Balanced) => (50, 35, 15),
        (Lifestyle::Student, Mood::Splurge) => (50, 45, 5),
        (Lifestyle::WorkingProfessional, Mood::Disciplined) => (50, 20, 30),
        (Lifestyle::WorkingProfessional, Mood::Balanced) => (50, 30, 20),
        (Lifestyle::WorkingProfessional, Mood::Splurge) => (50, 40, 10),
        (Lifestyle::Freelancer, Mood::Disciplined) => (45, 15, 40),
        (Lifestyle::Freelancer, Mood::Balanced) => (45, 25, 30),
        (Lifestyle::Freelancer, Mood::Splurge) => (45, 35, 20),
        (Lifestyle::Homemaker, Mood::Disciplined) => (60, 15, 25),
        (Lifestyle::Homemaker, Mood::Balanced) => (60, 25, 15),
        (Lifestyle::Homemaker, Mood::Splurge) => (60, 35, 5),
    };

    AllocationRule {
        lifestyle,
        mood,
        necessities_pct,
        wants_pct,
        savings_pct,
    }
}

/// Look up a rule from loosely-typed names
///
/// # Errors
///
/// Returns `UnknownProfile` if either name is not recognized.
pub fn lookup_by_name(lifestyle: &str, mood: &str) -> CoreflowResult<AllocationRule> {
    Ok(lookup(lifestyle.parse()?, mood.parse()?))
}

/// Every rule, lifestyle-major in display order
pub fn all_rules() -> Vec<AllocationRule> {
    Lifestyle::ALL
        .into_iter()
        .flat_map(|lifestyle| Mood::ALL.into_iter().map(move |mood| lookup(lifestyle, mood)))
        .collect()
}

// Every rule must split income completely.
const _: () = {
    let mut l = 0;
    while l < Lifestyle::ALL.len() {
        let mut m = 0;
        while m < Mood::ALL.len() {
            let rule = lookup(Lifestyle::ALL[l], Mood::ALL[m]);
            assert!(rule.total_pct() == 100, "allocation rule does not sum to 100");
            m += 1;
        }
        l += 1;
    }
};

/// Startup self-check over the whole table
///
/// Sums are already enforced at compile time; this also checks the
/// behavioral shape of the table: necessities do not move with mood, and
/// Splurge never saves more or spends less on wants than Disciplined.
pub fn verify() -> CoreflowResult<()> {
    for lifestyle in Lifestyle::ALL {
        let disciplined = lookup(lifestyle, Mood::Disciplined);
        let splurge = lookup(lifestyle, Mood::Splurge);

        for mood in Mood::ALL {
            let rule = lookup(lifestyle, mood);
            if rule.total_pct() != 100 {
                return Err(CoreflowError::Config(format!(
                    "allocation rule {} / {} sums to {}",
                    lifestyle,
                    mood,
                    rule.total_pct()
                )));
            }
            if rule.necessities_pct != disciplined.necessities_pct {
                return Err(CoreflowError::Config(format!(
                    "necessities for {} change with mood {}",
                    lifestyle, mood
                )));
            }
        }

        if splurge.wants_pct < disciplined.wants_pct
            || splurge.savings_pct > disciplined.savings_pct
        {
            return Err(CoreflowError::Config(format!(
                "Splurge does not skew toward wants for {}",
                lifestyle
            )));
        }
    }

    tracing::debug!("allocation rule table verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_sums_to_100() {
        let rules = all_rules();
        assert_eq!(rules.len(), 12);
        for rule in rules {
            assert_eq!(
                rule.necessities_pct as u32 + rule.wants_pct as u32 + rule.savings_pct as u32,
                100,
                "{:?}",
                rule
            );
        }
    }

    #[test]
    fn test_verify_passes() {
        verify().unwrap();
    }

    #[test]
    fn test_lookup_values() {
        assert_eq!(
            lookup(Lifestyle::Student, Mood::Disciplined).as_tuple(),
            (50, 25, 25)
        );
        assert_eq!(
            lookup(Lifestyle::WorkingProfessional, Mood::Balanced).as_tuple(),
            (50, 30, 20)
        );
        assert_eq!(
            lookup(Lifestyle::Homemaker, Mood::Splurge).as_tuple(),
            (60, 35, 5)
        );
    }

    #[test]
    fn test_mood_moves_ten_points_between_wants_and_savings() {
        for lifestyle in Lifestyle::ALL {
            let balanced = lookup(lifestyle, Mood::Balanced);
            let disciplined = lookup(lifestyle, Mood::Disciplined);
            let splurge = lookup(lifestyle, Mood::Splurge);

            assert_eq!(disciplined.savings_pct, balanced.savings_pct + 10);
            assert_eq!(disciplined.wants_pct + 10, balanced.wants_pct);
            assert_eq!(splurge.wants_pct, balanced.wants_pct + 10);
            assert_eq!(splurge.savings_pct + 10, balanced.savings_pct);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let rule = lookup_by_name("Working Professional", "Splurge").unwrap();
        assert_eq!(rule.as_tuple(), (50, 40, 10));

        let err = lookup_by_name("Astronaut", "Splurge").unwrap_err();
        assert!(err.is_unknown_profile());
        let err = lookup_by_name("Student", "Reckless").unwrap_err();
        assert!(err.is_unknown_profile());
    }
}
