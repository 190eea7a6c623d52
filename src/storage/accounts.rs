//! Bank account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FlowError, FlowResult};
use crate::models::{BankAccount, BankAccountId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    #[serde(default)]
    accounts: Vec<BankAccount>,
}

/// Repository for bank account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<BankAccountId, BankAccount>>,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> FlowResult<()> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> FlowResult<()> {
        let file_data = AccountData {
            accounts: self.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: BankAccountId) -> FlowResult<Option<BankAccount>> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all accounts, ordered by name
    pub fn get_all(&self) -> FlowResult<Vec<BankAccount>> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(accounts)
    }

    pub fn get_active(&self) -> FlowResult<Vec<BankAccount>> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|a| a.is_active).collect())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: BankAccount) -> FlowResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(account.id, account);
        Ok(())
    }

    pub fn count(&self) -> FlowResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
