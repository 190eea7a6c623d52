//! Recurring payment repository
//!
//! Manages loading and saving recurring payments to recurring_payments.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FlowError, FlowResult};
use crate::models::{RecurringPayment, RecurringPaymentId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecurringPaymentData {
    #[serde(default)]
    payments: Vec<RecurringPayment>,
}

/// Repository for recurring payment persistence
pub struct RecurringPaymentRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecurringPaymentId, RecurringPayment>>,
}

impl RecurringPaymentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> FlowResult<()> {
        let file_data: RecurringPaymentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for payment in file_data.payments {
            data.insert(payment.id, payment);
        }

        Ok(())
    }

    pub fn save(&self) -> FlowResult<()> {
        let file_data = RecurringPaymentData {
            payments: self.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all payments, ordered by payment day then name
    pub fn get_all(&self) -> FlowResult<Vec<RecurringPayment>> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut payments: Vec<_> = data.values().cloned().collect();
        payments.sort_by(|a, b| {
            a.payment_day
                .cmp(&b.payment_day)
                .then(a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });
        Ok(payments)
    }

    pub fn get_active(&self) -> FlowResult<Vec<RecurringPayment>> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|p| p.is_active).collect())
    }

    /// Insert or update a payment
    pub fn upsert(&self, payment: RecurringPayment) -> FlowResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(payment.id, payment);
        Ok(())
    }
}
