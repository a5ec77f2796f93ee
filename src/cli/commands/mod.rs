pub mod config;
pub mod init;
pub mod report;
pub mod summary;

use crate::cli::parser::InputArgs;
use crate::config::Config;
use crate::core::{AttendanceReport, TimezoneService};
use crate::errors::AppResult;
use crate::models::EventWindow;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Resolve timezone, window and policy, then run the whole pipeline.
pub(crate) fn load_report(input: &InputArgs, cfg: &Config) -> AppResult<AttendanceReport> {
    let tz_name = input
        .timezone_name
        .as_deref()
        .unwrap_or(cfg.default_timezone.as_str());
    let tz = TimezoneService::new(tz_name)?;
    let window = EventWindow::from_local(&input.start, &input.end, &tz)?;
    let policy = input.policy.unwrap_or(cfg.attendance_policy);

    let path = expand_tilde(&input.file);
    info(format!("Reading engagement report: {}", path.display()));

    AttendanceReport::from_path(&path, window, tz, policy)
}
