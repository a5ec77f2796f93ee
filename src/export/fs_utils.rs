// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Checks that every target can be created or overwritten.
///
/// - No target exists → Ok
/// - `force` → Ok
/// - Otherwise asks the user once for all existing targets.
pub(crate) fn ensure_writable(paths: &[PathBuf], force: bool) -> AppResult<()> {
    let existing: Vec<&Path> = paths
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| p.exists())
        .collect();

    if existing.is_empty() || force {
        return Ok(());
    }

    for p in &existing {
        warning(format!("The file '{}' already exists.", p.display()));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing files will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
