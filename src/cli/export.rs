//! CLI command for plan export
//!
//! Writes a full plan report to a file in JSON, YAML or CSV.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::ProfileArgs;
use crate::config::Settings;
use crate::engine::Engine;
use crate::error::{CoreflowError, CoreflowResult};
use crate::export::{csv, json, yaml, PlanExport};
use crate::reports::PlanReport;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (monthly projection only)
    Csv,
    /// JSON format (full plan report)
    Json,
    /// YAML format (full plan report, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the `export` command
pub fn handle_export_command(
    engine: &Engine,
    settings: &Settings,
    args: ExportArgs,
) -> CoreflowResult<()> {
    let profile = args.profile.to_profile()?;
    let report = PlanReport::generate(engine, &profile, &settings.currency_symbol)?;

    let file = File::create(&args.output).map_err(|e| {
        CoreflowError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            csv::export_projection_csv(&report.projection, &mut writer)?;
            println!("Projection exported to: {}", args.output.display());
            println!("Note: CSV format exports the projection only. Use JSON or YAML for the full plan.");
        }
        ExportFormat::Json => {
            let export = PlanExport::new(report, &settings.currency_symbol);
            json::export_plan_json(&export, &mut writer, args.pretty)?;
            println!("Plan exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            let export = PlanExport::new(report, &settings.currency_symbol);
            yaml::export_plan_yaml(&export, &mut writer)?;
            println!("Plan exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| CoreflowError::Export(format!("Failed to write export: {}", e)))?;

    tracing::info!(
        path = %args.output.display(),
        format = ?args.format,
        "exported plan"
    );

    Ok(())
}
