//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine.

pub mod config;
pub mod export;
pub mod plan;
pub mod scenario;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use plan::{handle_plan_command, handle_project_command, handle_rules_command, ProjectArgs};
pub use scenario::{handle_scenario_command, ScenarioCommands};

use clap::Args;

use crate::error::{CoreflowError, CoreflowResult};
use crate::models::{Money, Profile};

/// Profile flags shared by every command that runs a full calculation
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Monthly take-home income (e.g., "50000", "50000.50", "₹50,000")
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: String,

    /// Lifestyle (student, working-professional, freelancer, homemaker)
    #[arg(short, long)]
    pub lifestyle: String,

    /// Spending mood (disciplined, balanced, splurge)
    #[arg(short, long)]
    pub mood: String,

    /// Fixed monthly commitments paid out of necessities (rent, EMIs)
    #[arg(long, allow_hyphen_values = true)]
    pub fixed: Option<String>,
}

impl ProfileArgs {
    /// Parse the flags into a profile
    pub fn to_profile(&self) -> CoreflowResult<Profile> {
        let income = parse_amount("income", &self.income)?;
        let mut profile = Profile::from_names(&self.lifestyle, &self.mood, income.to_f64())?;

        if let Some(fixed) = &self.fixed {
            profile = profile.with_fixed_commitments(parse_amount("fixed commitments", fixed)?);
        }

        Ok(profile)
    }
}

/// Parse a user-entered amount
pub fn parse_amount(name: &str, value: &str) -> CoreflowResult<Money> {
    Money::parse(value).map_err(|e| CoreflowError::Validation(format!("{} ({})", e, name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lifestyle, Mood};

    fn args(income: &str, lifestyle: &str, mood: &str) -> ProfileArgs {
        ProfileArgs {
            income: income.into(),
            lifestyle: lifestyle.into(),
            mood: mood.into(),
            fixed: None,
        }
    }

    #[test]
    fn test_to_profile() {
        let mut args = args("₹50,000", "working-professional", "Splurge");
        args.fixed = Some("12000.50".into());

        let profile = args.to_profile().unwrap();
        assert_eq!(profile.lifestyle, Lifestyle::WorkingProfessional);
        assert_eq!(profile.mood, Mood::Splurge);
        assert_eq!(profile.monthly_income, 50_000.0);
        assert_eq!(profile.fixed_commitments, Money::from_units_cents(12_000, 50));
    }

    #[test]
    fn test_to_profile_errors() {
        assert!(matches!(
            args("abc", "student", "balanced").to_profile(),
            Err(CoreflowError::Validation(_))
        ));
        assert!(args("1000", "retiree", "balanced")
            .to_profile()
            .unwrap_err()
            .is_unknown_profile());
    }
}
