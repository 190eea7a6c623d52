//! Income models
//!
//! Income sources are either fixed monthly income (salary) paid on a pay day, or
//! one-time income landing on a scheduled date. Monthly income records override
//! the base amount of a monthly source for a single month.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{IncomeSourceId, MonthlyIncomeRecordId};
use super::money::Money;
use super::year_month::YearMonth;

/// Pay day used by monthly income sources that don't set one
pub const DEFAULT_PAYMENT_DAY: u32 = 25;

/// How an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// Paid every month on the source's pay day
    MonthlyFixed,
    /// Paid once, on a scheduled date or month
    OneTime,
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthlyFixed => write!(f, "monthly_fixed"),
            Self::OneTime => write!(f, "one_time"),
        }
    }
}

/// A source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub name: String,
    pub income_type: IncomeType,
    pub base_amount: Money,

    /// Day of month a `monthly_fixed` source pays on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_day: Option<u32>,

    /// Exact date of a `one_time` source, kept as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,

    /// Legacy `"YYYY-MM"` schedule of a `one_time` source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_year_month: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl IncomeSource {
    /// Create an active monthly income source paying on the default pay day
    pub fn monthly_fixed(name: impl Into<String>, base_amount: Money) -> Self {
        Self::new(name, IncomeType::MonthlyFixed, base_amount)
    }

    /// Create an active one-time income source with no schedule yet
    pub fn one_time(name: impl Into<String>, base_amount: Money) -> Self {
        Self::new(name, IncomeType::OneTime, base_amount)
    }

    fn new(name: impl Into<String>, income_type: IncomeType, base_amount: Money) -> Self {
        Self {
            id: IncomeSourceId::new(),
            name: name.into(),
            income_type,
            base_amount,
            payment_day: None,
            scheduled_date: None,
            scheduled_year_month: None,
            is_active: true,
        }
    }

    pub fn with_payment_day(mut self, day: u32) -> Self {
        self.payment_day = Some(day);
        self
    }

    pub fn with_scheduled_date(mut self, date: impl Into<String>) -> Self {
        self.scheduled_date = Some(date.into());
        self
    }

    pub fn with_scheduled_year_month(mut self, year_month: impl Into<String>) -> Self {
        self.scheduled_year_month = Some(year_month.into());
        self
    }

    /// The day of month a monthly source pays on
    pub fn pay_day(&self) -> u32 {
        self.payment_day.unwrap_or(DEFAULT_PAYMENT_DAY)
    }

    /// Resolve when a one-time source pays out
    ///
    /// `scheduled_date` takes precedence over `scheduled_year_month`. A date that
    /// none of the accepted formats can read resolves to [`ScheduledOn::Skip`].
    pub fn one_time_schedule(&self) -> ScheduledOn {
        if let Some(raw) = &self.scheduled_date {
            return match parse_scheduled_date(raw) {
                Some(date) => ScheduledOn::Date(date),
                None => ScheduledOn::Skip,
            };
        }

        match self.scheduled_year_month.as_deref().map(YearMonth::parse) {
            Some(Ok(month)) => ScheduledOn::FirstOfMonth(month),
            _ => ScheduledOn::Unscheduled,
        }
    }
}

/// Where a one-time income lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledOn {
    /// On this exact calendar date
    Date(NaiveDate),
    /// On day 1 of this month
    FirstOfMonth(YearMonth),
    /// `scheduled_date` is set but unreadable; the source never pays
    Skip,
    /// Nothing scheduled
    Unscheduled,
}

impl ScheduledOn {
    /// Check if the income lands on `date`
    pub fn lands_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::Date(scheduled) => *scheduled == date,
            Self::FirstOfMonth(month) => month.contains(date) && date.day() == 1,
            Self::Skip | Self::Unscheduled => false,
        }
    }
}

type DateParser = fn(&str) -> Option<NaiveDate>;

/// Accepted `scheduled_date` formats, tried in order
const SCHEDULED_DATE_PARSERS: [DateParser; 3] =
    [parse_plain_date, parse_offset_datetime, parse_naive_datetime];

/// Parse a scheduled date, trying each accepted format in turn
pub fn parse_scheduled_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    SCHEDULED_DATE_PARSERS.iter().find_map(|parse| parse(raw))
}

fn parse_plain_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

// The calendar date is taken in the offset the value was written with.
fn parse_offset_datetime(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Actual income of a monthly source for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyIncomeRecord {
    pub id: MonthlyIncomeRecordId,
    pub income_source_id: IncomeSourceId,
    pub year_month: YearMonth,
    pub actual_amount: Money,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub note: String,
}

impl MonthlyIncomeRecord {
    /// Create an unconfirmed record
    pub fn new(income_source_id: IncomeSourceId, year_month: YearMonth, actual_amount: Money) -> Self {
        Self {
            id: MonthlyIncomeRecordId::new(),
            income_source_id,
            year_month,
            actual_amount,
            is_confirmed: false,
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pay_day_defaults_to_25() {
        let salary = IncomeSource::monthly_fixed("Salary", Money::from_minor(300000));
        assert_eq!(salary.pay_day(), 25);
        assert_eq!(salary.with_payment_day(10).pay_day(), 10);
    }

    #[test]
    fn test_scheduled_date_formats() {
        assert_eq!(parse_scheduled_date("2024-12-25"), Some(date(2024, 12, 25)));
        assert_eq!(
            parse_scheduled_date("2024-12-25T09:30:00+09:00"),
            Some(date(2024, 12, 25))
        );
        assert_eq!(
            parse_scheduled_date("2024-12-25T00:00:00Z"),
            Some(date(2024, 12, 25))
        );
        assert_eq!(
            parse_scheduled_date("2024-12-25T23:59:59"),
            Some(date(2024, 12, 25))
        );
        assert_eq!(parse_scheduled_date("25/12/2024"), None);
        assert_eq!(parse_scheduled_date(""), None);
    }

    #[test]
    fn test_offset_date_is_taken_in_its_own_offset() {
        // 23:30 at -05:00 is already the 26th in UTC, but the written date wins.
        assert_eq!(
            parse_scheduled_date("2024-12-25T23:30:00-05:00"),
            Some(date(2024, 12, 25))
        );
    }

    #[test]
    fn test_scheduled_date_takes_precedence() {
        let bonus = IncomeSource::one_time("Bonus", Money::from_minor(100000))
            .with_scheduled_date("2024-12-25")
            .with_scheduled_year_month("2024-07");
        assert_eq!(bonus.one_time_schedule(), ScheduledOn::Date(date(2024, 12, 25)));
    }

    #[test]
    fn test_unreadable_date_is_skipped_even_with_year_month() {
        let bonus = IncomeSource::one_time("Bonus", Money::from_minor(100000))
            .with_scheduled_date("next christmas")
            .with_scheduled_year_month("2024-07");
        assert_eq!(bonus.one_time_schedule(), ScheduledOn::Skip);
        assert!(!ScheduledOn::Skip.lands_on(date(2024, 7, 1)));
    }

    #[test]
    fn test_year_month_fallback_lands_on_first_day() {
        let refund = IncomeSource::one_time("Tax refund", Money::from_minor(20000))
            .with_scheduled_year_month("2024-07");
        let schedule = refund.one_time_schedule();
        assert!(schedule.lands_on(date(2024, 7, 1)));
        assert!(!schedule.lands_on(date(2024, 7, 2)));
        assert!(!schedule.lands_on(date(2024, 8, 1)));
    }

    #[test]
    fn test_unscheduled_never_lands() {
        let gift = IncomeSource::one_time("Gift", Money::from_minor(5000));
        assert_eq!(gift.one_time_schedule(), ScheduledOn::Unscheduled);
    }

    #[test]
    fn test_income_type_serde() {
        let json = serde_json::to_string(&IncomeType::MonthlyFixed).unwrap();
        assert_eq!(json, "\"monthly_fixed\"");
        let parsed: IncomeType = serde_json::from_str("\"one_time\"").unwrap();
        assert_eq!(parsed, IncomeType::OneTime);
    }
}
