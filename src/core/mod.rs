pub mod aggregator;
pub mod loader;
pub mod merger;
pub mod pairer;
pub mod report;
pub mod splitter;
pub mod timezone;

pub use report::{AttendanceReport, ReportSummary};
pub use timezone::TimezoneService;
