//! What-if scenario CLI commands
//!
//! Each scenario compares a changed plan against the unchanged baseline over
//! the configured horizon.

use clap::Subcommand;

use crate::cli::{parse_amount, ProfileArgs};
use crate::config::Settings;
use crate::display::{format_delta, format_money_colored, format_percentage};
use crate::engine::Engine;
use crate::error::CoreflowResult;
use crate::models::{Money, Mood};

/// Scenario subcommands
#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// Compare the current mood with another one
    Mood {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Mood to compare against
        #[arg(long)]
        to: String,
    },

    /// Shift percentage points between wants and savings
    Savings {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Points to move into savings (negative moves them into wants)
        #[arg(short, long, allow_hyphen_values = true)]
        delta: f64,
    },

    /// Opportunity cost of a recurring monthly splurge
    Splurge {
        /// Monthly splurge amount
        #[arg(short, long)]
        amount: String,

        /// Number of years the splurge repeats (defaults to the configured value)
        #[arg(short, long)]
        years: Option<u32>,
    },
}

/// Handle scenario commands
pub fn handle_scenario_command(
    engine: &Engine,
    settings: &Settings,
    cmd: ScenarioCommands,
) -> CoreflowResult<()> {
    let symbol = &settings.currency_symbol;
    let horizon = engine.assumptions().horizon_months;

    match cmd {
        ScenarioCommands::Mood { profile, to } => {
            let profile = profile.to_profile()?;
            let new_mood: Mood = to.parse()?;
            let delta = engine.simulate_mood_change(&profile, new_mood)?;

            println!(
                "Switching from {} to {} over {} months:",
                profile.mood, new_mood, horizon
            );
            if delta.is_zero() {
                println!("  No change in projected wealth.");
            } else {
                println!("  {}", format_delta(&delta, symbol));
            }
        }
        ScenarioCommands::Savings { profile, delta } => {
            let profile = profile.to_profile()?;
            let adjusted = engine.adjusted_budget(&profile, delta)?;
            let outcome = engine.simulate_savings_adjustment(&profile, delta)?;

            if adjusted.was_clamped() {
                println!(
                    "Requested shift of {:+} points limited to {:+} points.",
                    adjusted.requested_delta_pct, adjusted.applied_delta_pct
                );
            }
            println!(
                "Savings {:.1}% ({}), wants {:.1}% ({})",
                adjusted.savings_pct,
                adjusted.savings.format_with_symbol(symbol),
                adjusted.wants_pct,
                adjusted.wants.format_with_symbol(symbol)
            );
            println!(
                "Projected wealth in {} months: {}",
                horizon,
                format_delta(&outcome, symbol)
            );
        }
        ScenarioCommands::Splurge { amount, years } => {
            let amount = parse_amount("splurge amount", &amount)?;
            let years = years.unwrap_or(engine.assumptions().splurge_years);
            let rate = engine.assumptions().annual_return_rate;
            let cost = engine.simulate_recurring_splurge(amount.to_f64(), years, rate)?;

            println!(
                "Spending {} every month for {} years ({} return):",
                amount.format_with_symbol(symbol),
                years,
                format_percentage(rate)
            );
            println!(
                "  Opportunity cost: {}",
                format_money_colored(-Money::from_f64(cost), symbol)
            );
            if cost > 0.0 {
                println!(
                    "  {} of that is growth you would have earned.",
                    Money::from_f64(cost - amount.to_f64() * f64::from(years) * 12.0)
                        .format_rounded(symbol)
                );
            }
        }
    }

    Ok(())
}
