//! Money type for representing currency amounts
//!
//! Amounts are integers in the minor unit of the currency (cents, yen, ...).
//! No floating point is involved anywhere in the projection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount in minor currency units
///
/// The operator impls use plain `i64` arithmetic. Running totals that can grow
/// without bound go through [`Money::checked_add`] and [`Money::checked_sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use flow_sight::models::Money;
    /// let amount = Money::from_minor(150_000);
    /// assert_eq!(amount.minor_units(), 150_000);
    /// ```
    pub const fn from_minor(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, returning `None` when the result leaves the `i64` range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning `None` when the result leaves the `i64` range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse an integer amount in minor units, e.g. `"50000"` or `"-120"`
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);
        assert_eq!((-a).minor_units(), -1000);

        let mut c = a;
        c -= b;
        c += Money::from_minor(1);
        assert_eq!(c.minor_units(), 501);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("50000").unwrap().minor_units(), 50000);
        assert_eq!(Money::parse(" -120 ").unwrap().minor_units(), -120);
        assert!(Money::parse("12.50").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_display_is_plain_integer() {
        assert_eq!(Money::from_minor(150000).to_string(), "150000");
        assert_eq!(Money::from_minor(-3).to_string(), "-3");
    }

    #[test]
    fn test_sum_and_checks() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_minor).sum();
        assert_eq!(total.minor_units(), 600);
        assert!(Money::zero().is_zero());
        assert!(total.is_positive());
        assert!((-total).is_negative());
    }

    #[test]
    fn test_checked_arithmetic() {
        let near_max = Money::from_minor(i64::MAX - 10);
        assert_eq!(
            near_max.checked_add(Money::from_minor(10)),
            Some(Money::from_minor(i64::MAX))
        );
        assert_eq!(near_max.checked_add(Money::from_minor(300000)), None);
        assert_eq!(Money::from_minor(i64::MIN).checked_sub(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_minor(500).checked_sub(Money::from_minor(800)),
            Some(Money::from_minor(-300))
        );
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
