// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Sheet;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::path::with_stem_suffix;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export JSON pretty-printed: one array per table, keyed by lower-case sheet name.
pub(crate) fn export_json(sheets: &[Sheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc: Map<String, Value> = sheets
        .iter()
        .map(|s| (s.name.to_lowercase(), Value::Array(s.to_json_records())))
        .collect();

    let json_data = serde_json::to_string_pretty(&Value::Object(doc))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Paths written by the CSV exporter: `<stem>_<sheet>.csv` next to `path`.
pub(crate) fn csv_paths(sheets: &[Sheet], path: &Path) -> Vec<PathBuf> {
    sheets
        .iter()
        .map(|s| with_stem_suffix(path, &s.name.to_lowercase()))
        .collect()
}

/// Export CSV: one file per table, header included.
pub(crate) fn export_csv(sheets: &[Sheet], path: &Path) -> AppResult<()> {
    for (sheet, target) in sheets.iter().zip(csv_paths(sheets, path)) {
        info(format!("Exporting to CSV: {}", target.display()));

        let mut wtr = csv::Writer::from_path(&target)
            .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

        wtr.write_record(&sheet.headers)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

        for row in &sheet.rows {
            wtr.write_record(row.iter().map(|c| c.display()))
                .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }

        wtr.flush()
            .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

        notify_export_success("CSV", &target);
    }

    Ok(())
}
