//! Calendar month representation
//!
//! A `YearMonth` identifies a calendar month without a day component and is
//! written as `"YYYY-MM"` everywhere (storage, lookups, schedules).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar month, e.g. `2024-06`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month a calendar date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month, accounting for leap years
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Every calendar day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let (year, month) = (self.year, self.month);
        (1..=self.days_in_month()).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month `count` months after this one
    pub fn add_months(&self, count: u32) -> Self {
        let index = self.month_index() + i64::from(count);
        Self::from_month_index(index)
    }

    /// The following month
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        Self::from_month_index(self.month_index() - 1)
    }

    /// Signed number of months from `start` to `self`
    ///
    /// `2024-06.months_since(2024-01) == 5`, and negative when `self` is earlier.
    pub fn months_since(&self, start: YearMonth) -> i64 {
        self.month_index() - start.month_index()
    }

    /// Parse a `"YYYY-MM"` string
    pub fn parse(s: &str) -> Result<Self, YearMonthParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(YearMonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_month_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Error type for year-month parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearMonthParseError {
    #[error("Invalid year-month format (expected YYYY-MM): {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
}
