//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the report pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the standard location
    let config_path = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };

    // load the configuration once
    let cfg = Config::load_from(&config_path)?;

    dispatch(&cli, &cfg, &config_path)
}
