//! Cashflow projection output
//!
//! One `CashflowProjection` row per simulated day, carrying the day's income,
//! expense, closing balance and the line items that produced them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Kind of a projection line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Income,
    RecurringPayment,
    CardPayment,
}

impl DetailKind {
    /// Check if this kind moves money out of the balance
    pub fn is_expense(&self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::RecurringPayment => write!(f, "recurring_payment"),
            Self::CardPayment => write!(f, "card_payment"),
        }
    }
}

/// A single line item of a projected day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionDetail {
    #[serde(rename = "type")]
    pub kind: DetailKind,
    pub description: String,
    pub amount: Money,
}

impl ProjectionDetail {
    pub fn new(kind: DetailKind, description: impl Into<String>, amount: Money) -> Self {
        Self {
            kind,
            description: description.into(),
            amount,
        }
    }
}

/// A projected day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowProjection {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
    /// Balance at the end of the day
    pub balance: Money,
    pub details: Vec<ProjectionDetail>,
}

impl CashflowProjection {
    /// Check if any money moved on this day
    pub fn has_activity(&self) -> bool {
        !self.income.is_zero() || !self.expense.is_zero()
    }
}
