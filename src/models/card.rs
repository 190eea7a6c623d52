//! Credit card models
//!
//! A card with a closing day bills the previous month's usage on its payment day.
//! A card without one (loan-like assets) bills the current month's total.

use serde::{Deserialize, Serialize};

use super::ids::{CardMonthlyTotalId, CreditCardId};
use super::money::Money;
use super::year_month::YearMonth;

/// A credit card or loan-like asset paid from the bank balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: CreditCardId,
    pub name: String,

    /// Statement closing day; `None` for same-month billing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_day: Option<u32>,

    /// Day of month the bill is withdrawn
    pub payment_day: u32,
}

impl CreditCard {
    /// Create a card with a billing cycle
    pub fn new(name: impl Into<String>, closing_day: u32, payment_day: u32) -> Self {
        Self {
            id: CreditCardId::new(),
            name: name.into(),
            closing_day: Some(closing_day),
            payment_day,
        }
    }

    /// Create a card that bills the current month's usage
    pub fn same_month(name: impl Into<String>, payment_day: u32) -> Self {
        Self {
            id: CreditCardId::new(),
            name: name.into(),
            closing_day: None,
            payment_day,
        }
    }

    /// The usage month billed on this card's payment day in `projection_month`
    ///
    /// With a closing day this is always the previous calendar month, whichever
    /// side of the payment day the closing day falls on.
    pub fn billing_month_for(&self, projection_month: YearMonth) -> YearMonth {
        match self.closing_day {
            Some(_) => projection_month.prev(),
            None => projection_month,
        }
    }
}

/// Billed usage of a card for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMonthlyTotal {
    pub id: CardMonthlyTotalId,
    pub credit_card_id: CreditCardId,
    pub year_month: YearMonth,
    pub total_amount: Money,
    #[serde(default)]
    pub is_confirmed: bool,
}

impl CardMonthlyTotal {
    /// Create an unconfirmed total
    pub fn new(credit_card_id: CreditCardId, year_month: YearMonth, total_amount: Money) -> Self {
        Self {
            id: CardMonthlyTotalId::new(),
            credit_card_id,
            year_month,
            total_amount,
            is_confirmed: false,
        }
    }
}
