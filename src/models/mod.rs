//! Core data models for Flow Sight
//!
//! This module contains the entities the projection reads (accounts, income,
//! recurring payments, cards, settings) and the projection output rows.

pub mod account;
pub mod card;
pub mod ids;
pub mod income;
pub mod money;
pub mod projection;
pub mod recurring;
pub mod setting;
pub mod year_month;

pub use account::BankAccount;
pub use card::{CardMonthlyTotal, CreditCard};
pub use ids::{
    BankAccountId, CardMonthlyTotalId, CreditCardId, IncomeSourceId, MonthlyIncomeRecordId,
    RecurringPaymentId,
};
pub use income::{IncomeSource, IncomeType, MonthlyIncomeRecord, ScheduledOn};
pub use money::Money;
pub use projection::{CashflowProjection, DetailKind, ProjectionDetail};
pub use recurring::{PaymentEligibility, RecurringPayment};
pub use setting::{Setting, MINIMUM_MONTHLY_EXPENSE};
pub use year_month::YearMonth;
