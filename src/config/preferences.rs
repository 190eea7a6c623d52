//! User preferences for Flow Sight
//!
//! Defaults for the `project` command and the log filter, kept in `config.json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::FlowPaths;
use crate::error::{FlowError, FlowResult};
use crate::projection::ProjectionHorizon;

/// How projection rows are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FlowError::Validation(format!(
                "Unknown output format '{}'. Use table, json, csv or yaml",
                other
            ))),
        }
    }
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Months projected when `--months` is not given
    #[serde(default)]
    pub default_months: ProjectionHorizon,

    /// Hide days without income or expense by default
    #[serde(default)]
    pub only_changes: bool,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// `tracing` filter used when `FLOW_SIGHT_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "flow_sight=warn".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_months: ProjectionHorizon::default(),
            only_changes: false,
            output_format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Preferences {
    /// Load preferences from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FlowPaths) -> FlowResult<Self> {
        let path = paths.preferences_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| FlowError::Io(format!("Failed to read preferences file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| FlowError::Config(format!("Failed to parse preferences file: {}", e)))
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Self::default())
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &FlowPaths) -> FlowResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FlowError::Config(format!("Failed to serialize preferences: {}", e)))?;

        std::fs::write(paths.preferences_file(), contents)
            .map_err(|e| FlowError::Io(format!("Failed to write preferences file: {}", e)))?;

        Ok(())
    }
}
