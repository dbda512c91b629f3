use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coreflow::cli::{
    handle_config_command, handle_export_command, handle_plan_command, handle_project_command,
    handle_rules_command, handle_scenario_command, ConfigCommands, ExportArgs, ProfileArgs,
    ProjectArgs, ScenarioCommands,
};
use coreflow::config::{rules, CoreflowPaths, Settings};
use coreflow::Engine;

#[derive(Parser)]
#[command(
    name = "coreflow",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance calculator: budget split, wealth projection and what-ifs",
    long_about = "CoreFlow splits a monthly income into necessities, wants and savings \
                  based on lifestyle and spending mood, projects the savings forward \
                  with inflation, grades the plan and runs what-if scenarios."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Annual return rate override (e.g., 0.07)
    #[arg(long = "return", global = true, allow_hyphen_values = true)]
    return_rate: Option<f64>,

    /// Annual inflation rate override (e.g., 0.06)
    #[arg(long, global = true, allow_hyphen_values = true)]
    inflation: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a full financial plan for a profile
    Plan(ProfileArgs),

    /// Project a monthly savings amount forward
    Project(ProjectArgs),

    /// What-if scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommands),

    /// Show the allocation rule table
    Rules,

    /// Export a plan to a file
    Export(ExportArgs),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    rules::verify()?;

    let paths = CoreflowPaths::new()?;
    let Cli {
        command,
        return_rate,
        inflation,
        ..
    } = cli;
    let load = || load_engine(&paths, return_rate, inflation);

    match command {
        Some(Commands::Plan(args)) => {
            let (settings, engine) = load()?;
            handle_plan_command(&engine, &settings, &args)?;
        }
        Some(Commands::Project(args)) => {
            let (settings, engine) = load()?;
            handle_project_command(&engine, &settings, &args)?;
        }
        Some(Commands::Scenario(cmd)) => {
            let (settings, engine) = load()?;
            handle_scenario_command(&engine, &settings, cmd)?;
        }
        Some(Commands::Rules) => handle_rules_command()?,
        Some(Commands::Export(args)) => {
            let (settings, engine) = load()?;
            handle_export_command(&engine, &settings, args)?;
        }
        // Runs without an engine; reset never reads the settings file.
        Some(Commands::Config(cmd)) => {
            let mut settings = match cmd {
                ConfigCommands::Reset => Settings::default(),
                _ => Settings::load_or_create(&paths)?,
            };
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        None => {
            println!("CoreFlow - Personal finance calculator");
            println!();
            println!("Run 'coreflow --help' for usage information.");
            println!("Run 'coreflow plan --income 50000 --lifestyle student --mood balanced' to get started.");
        }
    }

    Ok(())
}

/// Load settings and build an engine with any command-line rate overrides
fn load_engine(
    paths: &CoreflowPaths,
    return_rate: Option<f64>,
    inflation: Option<f64>,
) -> Result<(Settings, Engine)> {
    let settings = Settings::load_or_create(paths)?;

    let mut assumptions = settings.assumptions;
    if let Some(rate) = return_rate {
        assumptions = assumptions.with_return_rate(rate);
    }
    if let Some(rate) = inflation {
        assumptions = assumptions.with_inflation_rate(rate);
    }
    let engine = Engine::new(assumptions)?;

    Ok((settings, engine))
}
