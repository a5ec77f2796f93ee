use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::{fill_missing_keys, missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", config_path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_keys(config_path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            if fill_missing_keys(config_path)? {
                success(format!("Configuration updated: {}", config_path.display()));
            } else {
                info("Configuration already up to date.");
            }
        }
    }

    Ok(())
}
