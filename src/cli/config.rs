//! Settings CLI commands

use clap::Subcommand;

use crate::config::settings::SETTING_KEYS;
use crate::config::{CoreflowPaths, Settings};
use crate::display::format_percentage;
use crate::error::CoreflowResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings and where they are stored
    Show,

    /// Change a setting (return, inflation, horizon, splurge-years, currency)
    Set {
        /// Setting name
        key: String,
        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Restore the default settings
    Reset,
}

/// Handle config commands
pub fn handle_config_command(
    paths: &CoreflowPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> CoreflowResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let assumptions = &settings.assumptions;

            println!("CoreFlow Configuration");
            println!("======================");
            println!("Settings file: {}", paths.settings_file().display());
            if !paths.is_initialized() {
                println!("               (not saved yet, using defaults)");
            }
            println!();
            println!("  return         {}", format_percentage(assumptions.annual_return_rate));
            println!(
                "  inflation      {}",
                format_percentage(assumptions.annual_inflation_rate)
            );
            println!("  horizon        {} months", assumptions.horizon_months);
            println!("  splurge-years  {}", assumptions.splurge_years);
            println!("  currency       {}", settings.currency_symbol);
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value.trim());
        }
        ConfigCommands::Reset => {
            *settings = Settings::default();
            settings.save(paths)?;
            println!("Settings restored to defaults.");
            println!("Available keys: {}", SETTING_KEYS.join(", "));
        }
    }

    Ok(())
}
