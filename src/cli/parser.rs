use crate::export::ExportFormat;
use crate::models::AttendancePolicy;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to turn Teams attendee engagement logs into attendance reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Process MS Teams attendee engagement reports: pair sessions, clip them to the event window and sum attendance",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input log and event window shared by `report` and `summary`.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Path to the engagement report (CSV)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: String,

    /// Event start, local wall clock (YYYY-MM-DD HH:MM:SS)
    #[arg(short = 's', long = "start")]
    pub start: String,

    /// Event end, local wall clock (YYYY-MM-DD HH:MM:SS)
    #[arg(short = 'e', long = "end")]
    pub end: String,

    /// Local timezone of the event, like "America/Sao_Paulo" (default from config, UTC)
    #[arg(short = 't', long = "timezone-name", visible_alias = "tz")]
    pub timezone_name: Option<String>,

    /// Which sessions count toward attendance (default from config, inclusive)
    #[arg(long = "policy", value_enum)]
    pub policy: Option<AttendancePolicy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Build the report and export the Original, Sessions and Attendance tables
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (default from config, output.xlsx)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<String>,

        /// Output format (default: inferred from the output extension)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, help = "Overwrite existing output files without asking")]
        force: bool,

        #[arg(long, short = 'q', help = "Do not print the run summary")]
        quiet: bool,
    },

    /// Build the report and print the summary and attendance table only
    Summary {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long = "sessions", help = "Also list every paired session")]
        sessions: bool,
    },
}
