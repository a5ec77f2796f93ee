use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportSummary;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, Session};
use crate::ui::messages::{divider, header, info};
use crate::utils::colors::{color_for_minutes, color_for_validation};
use crate::utils::formatting::{key_value_line, mins2readable};
use crate::utils::table::{Column, Table};

const SUMMARY_WIDTH: usize = 50;

/// Handle the `summary` subcommand: run the pipeline, print, write nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input, sessions } = cmd {
        let report = super::load_report(input, cfg)?;

        print_summary(&report.summary());
        println!();

        if *sessions {
            print_sessions(&report.sessions);
            println!();
        }

        print_attendance(&report.attendance);
        info(format!("Attendance policy: {}", report.policy.as_str()));
    }
    Ok(())
}

pub(crate) fn print_summary(summary: &ReportSummary) {
    header("S U M M A R Y", SUMMARY_WIDTH);
    for section in summary.sections() {
        for (key, value) in section {
            println!("{}", key_value_line(key, &value, SUMMARY_WIDTH));
        }
        divider(SUMMARY_WIDTH);
    }
}

pub(crate) fn print_attendance(records: &[AttendanceRecord]) {
    if records.is_empty() {
        info("No participant with a Participant Id.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Full Name"),
        Column::left("Participant Id"),
        Column::left("Role"),
        Column::right("Minutes"),
        Column::right("Time"),
    ]);

    for r in records {
        table.add_colored_row(
            vec![
                r.full_name.clone(),
                r.participant_id.clone(),
                r.role.clone(),
                format!("{:.2}", r.attendance_minutes),
                mins2readable(r.attendance_minutes, false),
            ],
            color_for_minutes(r.attendance_minutes),
        );
    }

    print!("{}", table.render());
}

pub(crate) fn print_sessions(sessions: &[Session]) {
    let mut table = Table::new(vec![
        Column::left("Session Id"),
        Column::left("Full Name"),
        Column::left("Trunc Joined"),
        Column::left("Trunc Left"),
        Column::left("Validation"),
    ]);

    for s in sessions {
        table.add_colored_row(
            vec![
                s.session_id.clone(),
                s.full_name.clone(),
                s.trunc_joined.format("%Y-%m-%d %H:%M:%S").to_string(),
                s.trunc_left.format("%Y-%m-%d %H:%M:%S").to_string(),
                s.validation.label().to_string(),
            ],
            color_for_validation(s.validation),
        );
    }

    print!("{}", table.render());
}
