//! Unified application error type.
//! Every stage of the pipeline (loader, window, pairing, export, config)
//! returns AppError so that the single boundary in main.rs can report it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input log
    // ---------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // ---------------------------
    // Event window / timezone
    // ---------------------------
    #[error("Invalid event window: {0}")]
    Window(String),

    #[error("Unknown timezone: {0}")]
    Timezone(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
