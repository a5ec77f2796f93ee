// src/export/logic.rs

use crate::core::AttendanceReport;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{csv_paths, export_csv, export_json};
use crate::export::model::report_sheets;
use crate::export::xlsx::export_xlsx;
use std::path::{Path, PathBuf};

/// High-level export of a finished report.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the `Original`, `Sessions` and `Attendance` tables.
    ///
    /// - `xlsx`: one workbook, one sheet per table
    /// - `csv`: `<stem>_original.csv`, `<stem>_sessions.csv`, `<stem>_attendance.csv`
    /// - `json`: one document with three arrays
    ///
    /// Returns the files written.
    pub fn export(
        report: &AttendanceReport,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let sheets = report_sheets(report);

        let targets = match format {
            ExportFormat::Csv => csv_paths(&sheets, path),
            ExportFormat::Xlsx | ExportFormat::Json => vec![path.to_path_buf()],
        };

        ensure_writable(&targets, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&sheets, path)?,
            ExportFormat::Csv => export_csv(&sheets, path)?,
            ExportFormat::Json => export_json(&sheets, path)?,
        }

        Ok(targets)
    }
}
