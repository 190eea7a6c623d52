//! Recurring payment model
//!
//! Fixed monthly expenses such as rent, subscriptions and loan instalments.
//! Bounded payments (loans) stop after `total_payments` monthly occurrences
//! counted from `start_year_month`.

use serde::{Deserialize, Serialize};

use super::ids::RecurringPaymentId;
use super::money::Money;
use super::year_month::YearMonth;

/// A fixed monthly payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPayment {
    pub id: RecurringPaymentId,
    pub name: String,
    pub amount: Money,

    /// Day of month the payment is withdrawn
    pub payment_day: u32,

    /// First month the payment is due
    pub start_year_month: YearMonth,

    /// Number of monthly occurrences; `None` or `0` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_payments: Option<u32>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub note: String,
}

fn default_active() -> bool {
    true
}

/// Whether a recurring payment is due in a given month, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentEligibility {
    /// The payment is switched off
    Inactive,
    /// The target month is before `start_year_month`
    NotStarted,
    /// No bound on the number of payments
    Unbounded,
    /// Occurrence `occurrence` (1-based) of `total`
    Scheduled { occurrence: u32, total: u32 },
    /// All `total` occurrences happened before the target month
    Completed { total: u32 },
}

impl PaymentEligibility {
    /// Check if the payment fires in the target month
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Unbounded | Self::Scheduled { .. })
    }
}

impl RecurringPayment {
    /// Create an active, unbounded payment
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        payment_day: u32,
        start_year_month: YearMonth,
    ) -> Self {
        Self {
            id: RecurringPaymentId::new(),
            name: name.into(),
            amount,
            payment_day,
            start_year_month,
            total_payments: None,
            is_active: true,
            note: String::new(),
        }
    }

    /// Bound the payment to `count` monthly occurrences
    pub fn with_total_payments(mut self, count: u32) -> Self {
        self.total_payments = Some(count);
        self
    }

    /// Evaluate the payment for `target`
    pub fn eligibility(&self, target: YearMonth) -> PaymentEligibility {
        if !self.is_active {
            return PaymentEligibility::Inactive;
        }

        let elapsed = target.months_since(self.start_year_month);
        if elapsed < 0 {
            return PaymentEligibility::NotStarted;
        }

        let total = match self.total_payments {
            None | Some(0) => return PaymentEligibility::Unbounded,
            Some(total) => total,
        };

        let occurrence = elapsed + 1;
        if occurrence <= i64::from(total) {
            PaymentEligibility::Scheduled {
                occurrence: occurrence as u32,
                total,
            }
        } else {
            PaymentEligibility::Completed { total }
        }
    }

    /// Check if the payment is due in `target`
    pub fn is_due_in(&self, target: YearMonth) -> bool {
        self.eligibility(target).is_eligible()
    }
}
