//! Bank account model
//!
//! Only the balance of each active account matters to the projection: their sum
//! is the opening balance the simulation starts from.

use serde::{Deserialize, Serialize};

use super::ids::BankAccountId;
use super::money::Money;

/// A bank account holding cash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,

    /// Account name (e.g., "Main Savings")
    pub name: String,

    /// Current balance in minor units
    pub balance: Money,

    /// Inactive accounts are ignored by every reader
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl BankAccount {
    /// Create a new active account
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: BankAccountId::new(),
            name: name.into(),
            balance,
            is_active: true,
        }
    }
}
