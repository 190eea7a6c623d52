//! Path management for Flow Sight
//!
//! ## Path Resolution Order
//!
//! 1. `FLOW_SIGHT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `flow-sight`
//!    (`~/.config/flow-sight` on Linux, `%APPDATA%\flow-sight` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{FlowError, FlowResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FLOW_SIGHT_DATA_DIR";

/// Manages all paths used by Flow Sight
#[derive(Debug, Clone)]
pub struct FlowPaths {
    base_dir: PathBuf,
}

impl FlowPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> FlowResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FlowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Income sources and monthly income records
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    pub fn recurring_payments_file(&self) -> PathBuf {
        self.data_dir().join("recurring_payments.json")
    }

    /// Credit cards and their monthly totals
    pub fn cards_file(&self) -> PathBuf {
        self.data_dir().join("cards.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> FlowResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FlowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FlowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Flow Sight has been initialized (preferences file exists)
    pub fn is_initialized(&self) -> bool {
        self.preferences_file().exists()
    }
}

fn resolve_default_path() -> FlowResult<PathBuf> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FlowError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("flow-sight"))
}
