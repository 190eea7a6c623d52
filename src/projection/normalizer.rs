//! Minimum-expense normalizer
//!
//! Later months of a projection tend to under-count spending because card totals
//! are only known a month or two ahead. From the third simulated month on, a
//! month whose recurring and card expenses stay below the configured floor gets
//! one synthetic expense for the shortfall on day 26.

use crate::models::{DetailKind, Money, ProjectionDetail};

/// Day of month the adjustment is booked on
pub const ADJUSTMENT_DAY: u32 = 26;

/// Leading months that are never adjusted
pub const GRACE_MONTHS: u32 = 2;

pub const ADJUSTMENT_LABEL: &str = "最低月支出調整";

/// Configured monthly expense floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimumExpense {
    floor: Money,
}

impl MinimumExpense {
    pub fn new(floor: Money) -> Self {
        Self { floor }
    }

    /// A floor that never adjusts anything
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Read the floor from a raw setting value
    ///
    /// Missing or unparseable values disable the normalizer.
    pub fn from_setting(raw: Option<&str>) -> Self {
        raw.and_then(|value| Money::parse(value).ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn floor(&self) -> Money {
        self.floor
    }

    pub fn is_enabled(&self) -> bool {
        self.floor.is_positive()
    }

    /// The adjustment due on `day` of the month at `month_offset`, given what the
    /// month has spent so far
    pub fn adjustment(&self, month_offset: u32, day: u32, spent: Money) -> Option<ProjectionDetail> {
        if !self.is_enabled() || month_offset < GRACE_MONTHS || day != ADJUSTMENT_DAY {
            return None;
        }
        if spent >= self.floor {
            return None;
        }

        Some(ProjectionDetail::new(
            DetailKind::RecurringPayment,
            ADJUSTMENT_LABEL,
            self.floor - spent,
        ))
    }
}
