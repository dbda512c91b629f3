//! Profile model
//!
//! A profile is the caller's input to one calculation: a lifestyle, a
//! financial mood and a monthly income. Profiles are created fresh per
//! request and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreflowError, CoreflowResult};

use super::money::Money;

/// The user's life-stage category, which drives the baseline split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    Student,
    WorkingProfessional,
    Freelancer,
    Homemaker,
}

impl Lifestyle {
    /// Every lifestyle, in display order
    pub const ALL: [Lifestyle; 4] = [
        Lifestyle::Student,
        Lifestyle::WorkingProfessional,
        Lifestyle::Freelancer,
        Lifestyle::Homemaker,
    ];

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::WorkingProfessional => "Working Professional",
            Self::Freelancer => "Freelancer",
            Self::Homemaker => "Homemaker",
        }
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Lifestyle {
    type Err = CoreflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "student" => Ok(Self::Student),
            "workingprofessional" | "professional" => Ok(Self::WorkingProfessional),
            "freelancer" => Ok(Self::Freelancer),
            "homemaker" => Ok(Self::Homemaker),
            _ => Err(CoreflowError::unknown_lifestyle(s.trim())),
        }
    }
}

/// Behavioral-finance modifier that skews the baseline allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Disciplined,
    Balanced,
    Splurge,
}

impl Mood {
    /// Every mood, from most to least saving-oriented
    pub const ALL: [Mood; 3] = [Mood::Disciplined, Mood::Balanced, Mood::Splurge];

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Disciplined => "Disciplined",
            Self::Balanced => "Balanced",
            Self::Splurge => "Splurge",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Mood {
    type Err = CoreflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "disciplined" => Ok(Self::Disciplined),
            "balanced" => Ok(Self::Balanced),
            "splurge" => Ok(Self::Splurge),
            _ => Err(CoreflowError::unknown_mood(s.trim())),
        }
    }
}

/// Lowercase and drop word separators so "Working Professional",
/// "working-professional" and "working_professional" all match.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Input to a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub lifestyle: Lifestyle,
    pub mood: Mood,
    /// Monthly take-home income; validated when the budget is allocated
    pub monthly_income: f64,
    /// Rent, EMIs and other commitments paid out of necessities
    #[serde(default)]
    pub fixed_commitments: Money,
}

impl Profile {
    /// Create a profile with no fixed commitments
    pub fn new(lifestyle: Lifestyle, mood: Mood, monthly_income: f64) -> Self {
        Self {
            lifestyle,
            mood,
            monthly_income,
            fixed_commitments: Money::zero(),
        }
    }

    /// Build a profile from loosely-typed names
    ///
    /// # Errors
    ///
    /// Returns `UnknownProfile` if either name is not recognized.
    pub fn from_names(lifestyle: &str, mood: &str, monthly_income: f64) -> CoreflowResult<Self> {
        Ok(Self::new(lifestyle.parse()?, mood.parse()?, monthly_income))
    }

    /// Set the fixed monthly commitments
    pub fn with_fixed_commitments(mut self, fixed_commitments: Money) -> Self {
        self.fixed_commitments = fixed_commitments;
        self
    }

    /// The same profile under a different mood
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifestyle_parse_variants() {
        assert_eq!("Student".parse::<Lifestyle>().unwrap(), Lifestyle::Student);
        assert_eq!(
            "Working Professional".parse::<Lifestyle>().unwrap(),
            Lifestyle::WorkingProfessional
        );
        assert_eq!(
            "working-professional".parse::<Lifestyle>().unwrap(),
            Lifestyle::WorkingProfessional
        );
        assert_eq!(
            " HOMEMAKER ".parse::<Lifestyle>().unwrap(),
            Lifestyle::Homemaker
        );
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let err = "Retiree".parse::<Lifestyle>().unwrap_err();
        assert_eq!(err, CoreflowError::unknown_lifestyle("Retiree"));

        let err = "Anxious".parse::<Mood>().unwrap_err();
        assert!(err.is_unknown_profile());
        assert_eq!(err.to_string(), "Unknown mood: 'Anxious'");
    }

    #[test]
    fn test_labels_round_trip() {
        for lifestyle in Lifestyle::ALL {
            assert_eq!(lifestyle.label().parse::<Lifestyle>().unwrap(), lifestyle);
        }
        for mood in Mood::ALL {
            assert_eq!(mood.to_string().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_from_names() {
        let profile = Profile::from_names("freelancer", "splurge", 42_000.0).unwrap();
        assert_eq!(profile.lifestyle, Lifestyle::Freelancer);
        assert_eq!(profile.mood, Mood::Splurge);
        assert!(profile.fixed_commitments.is_zero());

        assert!(Profile::from_names("freelancer", "zen", 1.0).is_err());
    }

    #[test]
    fn test_with_mood_keeps_other_fields() {
        let profile = Profile::new(Lifestyle::Student, Mood::Balanced, 1000.0)
            .with_fixed_commitments(Money::from_cents(20_000));
        let changed = profile.with_mood(Mood::Disciplined);
        assert_eq!(changed.mood, Mood::Disciplined);
        assert_eq!(changed.lifestyle, profile.lifestyle);
        assert_eq!(changed.monthly_income, profile.monthly_income);
        assert_eq!(changed.fixed_commitments, profile.fixed_commitments);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Lifestyle::WorkingProfessional).unwrap();
        assert_eq!(json, "\"working_professional\"");
    }
}
