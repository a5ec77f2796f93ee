use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Handle the `report` subcommand.
///
/// The report is fully computed before any file is touched, so a failing
/// load or window leaves no partial output behind.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        output,
        format,
        force,
        quiet,
    } = cmd
    {
        let report = super::load_report(input, cfg)?;

        let out = output.as_deref().unwrap_or(cfg.default_output.as_str());
        let path = expand_tilde(out);

        let format = match format {
            Some(f) => *f,
            None if path.extension().is_none() => cfg.default_format,
            None => ExportFormat::from_path(&path)?,
        };

        if report.attendance.is_empty() {
            warning("No participant with a Participant Id: the Attendance table is empty.");
        }

        ExportLogic::export(&report, format, &path, *force)?;

        if !*quiet {
            println!();
            super::summary::print_summary(&report.summary());
        }
    }
    Ok(())
}
