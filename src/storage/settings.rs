//! Key/value settings repository
//!
//! Manages loading and saving settings to settings.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FlowError, FlowResult};
use crate::models::Setting;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SettingData {
    #[serde(default)]
    settings: Vec<Setting>,
}

/// Repository for key/value settings
pub struct SettingRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl SettingRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn load(&self) -> FlowResult<()> {
        let file_data: SettingData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for setting in file_data.settings {
            data.entry(setting.key).or_insert(setting.value);
        }

        Ok(())
    }

    pub fn save(&self) -> FlowResult<()> {
        let file_data = SettingData {
            settings: self.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, key: &str) -> FlowResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(key).cloned())
    }

    /// Get all settings, ordered by key
    pub fn get_all(&self) -> FlowResult<Vec<Setting>> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .map(|(key, value)| Setting::new(key.as_str(), value.as_str()))
            .collect())
    }

    /// Insert or update a setting
    pub fn upsert(&self, setting: Setting) -> FlowResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(setting.key, setting.value);
        Ok(())
    }
}
