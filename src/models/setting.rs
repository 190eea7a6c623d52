//! Key/value application settings
//!
//! Settings are free-form strings; readers parse the keys they understand.

use serde::{Deserialize, Serialize};

/// Monthly expense floor applied by the projection from the third month on
pub const MINIMUM_MONTHLY_EXPENSE: &str = "minimum_monthly_expense";

/// A single setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
