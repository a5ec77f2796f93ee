use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 4] = [
    "default_timezone",
    "default_output",
    "default_format",
    "attendance_policy",
];

/// Return the known keys absent from the YAML file at `path`.
/// A missing file is reported as missing every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_KEYS
            .iter()
            .filter(|k| !map.contains_key(Value::String(k.to_string())))
            .copied()
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    };

    Ok(missing)
}

/// Rewrite the file with defaults for the missing keys, keeping the values
/// already present.
///   Returns:
///   Ok(true)  → file updated
///   Ok(false) → nothing to add
pub fn fill_missing_keys(path: &Path) -> AppResult<bool> {
    if missing_keys(path)?.is_empty() {
        return Ok(false);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    Ok(true)
}
