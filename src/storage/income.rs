//! Income repository
//!
//! Persists income sources and their monthly income records to income.json.
//! Records keep their file order, so the first record for a source and month
//! is the one lookups see.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FlowError, FlowResult};
use crate::models::{IncomeSource, IncomeSourceId, MonthlyIncomeRecord, YearMonth};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    sources: Vec<IncomeSource>,
    #[serde(default)]
    records: Vec<MonthlyIncomeRecord>,
}

/// Repository for income sources and monthly income records
pub struct IncomeRepository {
    path: PathBuf,
    sources: RwLock<HashMap<IncomeSourceId, IncomeSource>>,
    records: RwLock<Vec<MonthlyIncomeRecord>>,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sources: RwLock::new(HashMap::new()),
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load sources and records from disk
    pub fn load(&self) -> FlowResult<()> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut sources = self
            .sources
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut records = self
            .records
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.clear();
        for source in file_data.sources {
            sources.insert(source.id, source);
        }
        *records = file_data.records;

        Ok(())
    }

    /// Save sources and records to disk
    pub fn save(&self) -> FlowResult<()> {
        let records = self
            .records
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = IncomeData {
            sources: self.get_all()?,
            records: records.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all income sources, ordered by name
    pub fn get_all(&self) -> FlowResult<Vec<IncomeSource>> {
        let sources = self
            .sources
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = sources.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    pub fn get_active(&self) -> FlowResult<Vec<IncomeSource>> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|s| s.is_active).collect())
    }

    /// Insert or update an income source
    pub fn upsert(&self, source: IncomeSource) -> FlowResult<()> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.insert(source.id, source);
        Ok(())
    }

    /// Insert or update a monthly income record
    pub fn upsert_record(&self, record: MonthlyIncomeRecord) -> FlowResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    /// All records for `year_month`, in file order
    pub fn records_for_month(&self, year_month: YearMonth) -> FlowResult<Vec<MonthlyIncomeRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records
            .iter()
            .filter(|r| r.year_month == year_month)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, IncomeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let salary = IncomeSource::monthly_fixed("Salary", Money::from_minor(300000));
        let may = YearMonth::new(2024, 5).unwrap();

        repo.upsert_record(MonthlyIncomeRecord::new(salary.id, may, Money::from_minor(310000)))
            .unwrap();
        repo.upsert(salary).unwrap();
        repo.save().unwrap();

        let repo2 = IncomeRepository::new(temp_dir.path().join("income.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap().len(), 1);
        let records = repo2.records_for_month(may).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actual_amount, Money::from_minor(310000));
        assert!(repo2.records_for_month(may.next()).unwrap().is_empty());
    }

    #[test]
    fn test_upsert_record_replaces_by_id() {
        let (_temp_dir, repo) = create_test_repo();
        let salary = IncomeSource::monthly_fixed("Salary", Money::from_minor(300000));
        let may = YearMonth::new(2024, 5).unwrap();
        let mut record = MonthlyIncomeRecord::new(salary.id, may, Money::from_minor(1));

        repo.upsert_record(record.clone()).unwrap();
        record.actual_amount = Money::from_minor(2);
        repo.upsert_record(record).unwrap();

        let records = repo.records_for_month(may).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actual_amount, Money::from_minor(2));
    }

    #[test]
    fn test_get_active_filters_inactive() {
        let (_temp_dir, repo) = create_test_repo();
        let mut paused = IncomeSource::monthly_fixed("Paused", Money::from_minor(1));
        paused.is_active = false;

        repo.upsert(paused).unwrap();
        repo.upsert(IncomeSource::one_time("Bonus", Money::from_minor(1))).unwrap();

        let active = repo.get_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Bonus");
    }
}
