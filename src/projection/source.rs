//! Collaborator interfaces the projection reads from
//!
//! Each store answers read-only queries. The file-backed [`crate::storage::Storage`]
//! implements all of them; tests use an in-memory store.

use crate::error::FlowResult;
use crate::models::{
    BankAccount, CardMonthlyTotal, CreditCard, CreditCardId, IncomeSource, MonthlyIncomeRecord,
    RecurringPayment, YearMonth,
};

/// Bank accounts and their balances
pub trait AccountStore {
    /// All active bank accounts
    fn active_accounts(&self) -> FlowResult<Vec<BankAccount>>;
}

/// Income sources and their per-month overrides
pub trait IncomeStore {
    /// All active income sources
    fn active_sources(&self) -> FlowResult<Vec<IncomeSource>>;

    /// Monthly income records of every source for `year_month`
    fn records_for_month(&self, year_month: YearMonth) -> FlowResult<Vec<MonthlyIncomeRecord>>;
}

/// Fixed monthly payments
pub trait RecurringPaymentStore {
    /// All active recurring payments
    fn active_payments(&self) -> FlowResult<Vec<RecurringPayment>>;
}

/// Credit cards and their billed monthly usage
pub trait CardStore {
    /// All credit cards
    fn cards(&self) -> FlowResult<Vec<CreditCard>>;

    /// Every monthly total recorded for one card
    fn totals_for_card(&self, card_id: CreditCardId) -> FlowResult<Vec<CardMonthlyTotal>>;
}

/// Key/value settings
pub trait SettingStore {
    /// The raw value stored under `key`, if any
    fn get(&self, key: &str) -> FlowResult<Option<String>>;
}

/// Everything a projection needs, in one bound
pub trait ProjectionStore:
    AccountStore + IncomeStore + RecurringPaymentStore + CardStore + SettingStore
{
}

impl<T> ProjectionStore for T where
    T: AccountStore + IncomeStore + RecurringPaymentStore + CardStore + SettingStore + ?Sized
{
}
