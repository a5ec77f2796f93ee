use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::AttendancePolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
    #[serde(default = "default_output")]
    pub default_output: String,
    #[serde(default)]
    pub default_format: ExportFormat,
    #[serde(default)]
    pub attendance_policy: AttendancePolicy,
}

fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_output() -> String {
    "output.xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            default_output: default_output(),
            default_format: ExportFormat::default(),
            attendance_policy: AttendancePolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Load configuration from the standard location
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating the parent directory
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }
}
