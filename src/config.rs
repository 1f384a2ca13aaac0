//! Top-level application configuration.
//!
//! Configuration is stored in `.replydesk/config.yaml` (or the file named by
//! `REPLYDESK_CONFIG`) and includes:
//! - Which data source supplies tickets
//! - Simulated latencies of the load, generation and sync stubs
//! - The fixed display offset used for dates
//! - Export file and sheet names

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use jiff::tz::Offset;
use serde::{Deserialize, Serialize};

use crate::error::{ReplydeskError, Result};
use crate::types::REPLYDESK_DIR;

pub const CONFIG_ENV: &str = "REPLYDESK_CONFIG";

pub const CONFIG_KEYS: &[&str] = &[
    "source.kind",
    "source.path",
    "latency.load_ms",
    "latency.generate_ms",
    "latency.sync_ms",
    "display.utc_offset_hours",
    "export.csv_file_name",
    "export.xlsx_file_name",
    "export.sheet_name",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub latency: LatencyConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Mock => write!(f, "mock"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = ReplydeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SourceKind::Mock),
            "file" => Ok(SourceKind::File),
            _ => Err(ReplydeskError::Config(format!(
                "invalid source kind '{}' (expected mock or file)",
                s
            ))),
        }
    }
}

/// Where tickets come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// JSON file for the `file` source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Simulated latencies in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_load_ms")]
    pub load_ms: u64,
    #[serde(default = "default_generate_ms")]
    pub generate_ms: u64,
    #[serde(default = "default_sync_ms")]
    pub sync_ms: u64,
}

fn default_load_ms() -> u64 {
    1000
}

fn default_generate_ms() -> u64 {
    2000
}

fn default_sync_ms() -> u64 {
    1500
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            load_ms: default_load_ms(),
            generate_ms: default_generate_ms(),
            sync_ms: default_sync_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fixed UTC offset dates are shown in (default: +3, Moscow)
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i8,
}

fn default_utc_offset_hours() -> i8 {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_csv_file_name")]
    pub csv_file_name: String,
    #[serde(default = "default_xlsx_file_name")]
    pub xlsx_file_name: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_csv_file_name() -> String {
    "tickets.csv".to_string()
}

fn default_xlsx_file_name() -> String {
    "tickets.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "Обращения".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_file_name: default_csv_file_name(),
            xlsx_file_name: default_xlsx_file_name(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(REPLYDESK_DIR).join("config.yaml"),
        }
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ReplydeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                ReplydeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            ReplydeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.display_offset()?;
        if self.export.sheet_name.trim().is_empty() {
            return Err(ReplydeskError::Config(
                "export.sheet_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.latency.load_ms)
    }

    pub fn generate_latency(&self) -> Duration {
        Duration::from_millis(self.latency.generate_ms)
    }

    pub fn sync_latency(&self) -> Duration {
        Duration::from_millis(self.latency.sync_ms)
    }

    /// The fixed offset dates are rendered in
    pub fn display_offset(&self) -> Result<Offset> {
        Offset::from_hours(self.display.utc_offset_hours).map_err(|e| {
            ReplydeskError::Config(format!(
                "invalid display.utc_offset_hours {}: {}",
                self.display.utc_offset_hours, e
            ))
        })
    }

    /// Read a single value by dotted key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "source.kind" => Some(self.source.kind.to_string()),
            "source.path" => self.source.path.as_ref().map(|p| p.display().to_string()),
            "latency.load_ms" => Some(self.latency.load_ms.to_string()),
            "latency.generate_ms" => Some(self.latency.generate_ms.to_string()),
            "latency.sync_ms" => Some(self.latency.sync_ms.to_string()),
            "display.utc_offset_hours" => Some(self.display.utc_offset_hours.to_string()),
            "export.csv_file_name" => Some(self.export.csv_file_name.clone()),
            "export.xlsx_file_name" => Some(self.export.xlsx_file_name.clone()),
            "export.sheet_name" => Some(self.export.sheet_name.clone()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a single value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source.kind" => self.source.kind = value.parse()?,
            "source.path" => self.source.path = Some(PathBuf::from(value)),
            "latency.load_ms" => self.latency.load_ms = parse_number(key, value)?,
            "latency.generate_ms" => self.latency.generate_ms = parse_number(key, value)?,
            "latency.sync_ms" => self.latency.sync_ms = parse_number(key, value)?,
            "display.utc_offset_hours" => {
                let hours: i8 = parse_number(key, value)?;
                Offset::from_hours(hours).map_err(|e| {
                    ReplydeskError::Config(format!("invalid value '{}' for {}: {}", value, key, e))
                })?;
                self.display.utc_offset_hours = hours;
            }
            "export.csv_file_name" => self.export.csv_file_name = non_empty(key, value)?,
            "export.xlsx_file_name" => self.export.xlsx_file_name = non_empty(key, value)?,
            "export.sheet_name" => self.export.sheet_name = non_empty(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ReplydeskError {
    ReplydeskError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ReplydeskError::Config(format!("invalid value '{}' for {}", value, key)))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ReplydeskError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
