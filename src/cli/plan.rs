//! Plan, projection and rules CLI commands

use clap::Args;

use crate::cli::{parse_amount, ProfileArgs};
use crate::config::{rules, Settings};
use crate::display::{format_percentage, separator};
use crate::engine::Engine;
use crate::error::CoreflowResult;
use crate::models::Money;
use crate::reports::PlanReport;

/// Arguments for the standalone projection table
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Monthly savings contribution
    #[arg(short, long, allow_hyphen_values = true)]
    pub savings: String,

    /// Number of months to project (defaults to the configured horizon)
    #[arg(long)]
    pub months: Option<u32>,
}

/// Handle the `plan` command
pub fn handle_plan_command(
    engine: &Engine,
    settings: &Settings,
    args: &ProfileArgs,
) -> CoreflowResult<()> {
    let profile = args.to_profile()?;
    let report = PlanReport::generate(engine, &profile, &settings.currency_symbol)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle the `project` command
pub fn handle_project_command(
    engine: &Engine,
    settings: &Settings,
    args: &ProjectArgs,
) -> CoreflowResult<()> {
    let savings = parse_amount("savings", &args.savings)?;
    let assumptions = engine.assumptions();
    let months = args.months.unwrap_or(assumptions.horizon_months);
    let series = engine.project(
        savings.to_f64(),
        months,
        assumptions.annual_return_rate,
        assumptions.annual_inflation_rate,
    )?;

    let symbol = &settings.currency_symbol;
    let rounded = |value: f64| Money::from_f64(value).format_rounded(symbol);

    println!(
        "{}-Month Wealth Projection: {} per month ({} return, {} inflation)",
        months,
        savings.format_with_symbol(symbol),
        format_percentage(assumptions.annual_return_rate),
        format_percentage(assumptions.annual_inflation_rate)
    );
    println!("{}", separator(40));

    if series.is_empty() {
        println!("Nothing to project.");
        return Ok(());
    }

    println!("{:>5} {:>16} {:>16}", "Month", "Nominal", "Real");
    for point in &series.points {
        println!(
            "{:>5} {:>16} {:>16}",
            point.month,
            rounded(point.nominal_balance),
            rounded(point.real_balance)
        );
    }
    println!("{}", separator(40));
    println!("Contributed:   {:>16}", rounded(series.total_contributed()));
    println!("Growth earned: {:>16}", rounded(series.growth_earned()));

    Ok(())
}

/// Handle the `rules` command
pub fn handle_rules_command() -> CoreflowResult<()> {
    println!(
        "{:<22} {:<12} {:>11} {:>6} {:>8}",
        "Lifestyle", "Mood", "Necessities", "Wants", "Savings"
    );
    println!("{}", separator(63));

    for rule in rules::all_rules() {
        println!(
            "{:<22} {:<12} {:>10}% {:>5}% {:>7}%",
            rule.lifestyle, rule.mood, rule.necessities_pct, rule.wants_pct, rule.savings_pct
        );
    }

    Ok(())
}
