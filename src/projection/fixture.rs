//! In-memory collaborator store for projection tests

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::{FlowError, FlowResult};
use crate::models::{
    BankAccount, CardMonthlyTotal, CreditCard, CreditCardId, IncomeSource, MonthlyIncomeRecord,
    RecurringPayment, YearMonth,
};

use super::source::{AccountStore, CardStore, IncomeStore, RecurringPaymentStore, SettingStore};

#[derive(Default)]
struct Failures {
    accounts: bool,
    income_sources: bool,
    income_records: bool,
    recurring_payments: bool,
    cards: bool,
    card_totals: bool,
    settings: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    accounts: Vec<BankAccount>,
    income_sources: Vec<IncomeSource>,
    income_records: Vec<MonthlyIncomeRecord>,
    recurring_payments: Vec<RecurringPayment>,
    cards: Vec<CreditCard>,
    card_totals: Vec<CardMonthlyTotal>,
    settings: HashMap<String, String>,
    failures: Failures,
    income_record_queries: Cell<usize>,
    card_total_queries: Cell<usize>,
}

fn fail<T>(what: &str, failing: bool, value: impl FnOnce() -> T) -> FlowResult<T> {
    if failing {
        Err(FlowError::Storage(format!("{} unavailable", what)))
    } else {
        Ok(value())
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: BankAccount) -> Self {
        self.accounts.push(account);
        self
    }

    pub fn with_income_source(mut self, source: IncomeSource) -> Self {
        self.income_sources.push(source);
        self
    }

    pub fn with_income_record(mut self, record: MonthlyIncomeRecord) -> Self {
        self.income_records.push(record);
        self
    }

    pub fn with_recurring_payment(mut self, payment: RecurringPayment) -> Self {
        self.recurring_payments.push(payment);
        self
    }

    pub fn with_card(mut self, card: CreditCard) -> Self {
        self.cards.push(card);
        self
    }

    pub fn with_card_total(mut self, total: CardMonthlyTotal) -> Self {
        self.card_totals.push(total);
        self
    }

    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings.insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing_accounts(mut self) -> Self {
        self.failures.accounts = true;
        self
    }

    pub fn failing_income_sources(mut self) -> Self {
        self.failures.income_sources = true;
        self
    }

    pub fn failing_income_records(mut self) -> Self {
        self.failures.income_records = true;
        self
    }

    pub fn failing_recurring_payments(mut self) -> Self {
        self.failures.recurring_payments = true;
        self
    }

    pub fn failing_cards(mut self) -> Self {
        self.failures.cards = true;
        self
    }

    pub fn failing_card_totals(mut self) -> Self {
        self.failures.card_totals = true;
        self
    }

    pub fn failing_settings(mut self) -> Self {
        self.failures.settings = true;
        self
    }

    /// Number of `records_for_month` calls served so far
    pub fn income_record_queries(&self) -> usize {
        self.income_record_queries.get()
    }

    /// Number of `totals_for_card` calls served so far
    pub fn card_total_queries(&self) -> usize {
        self.card_total_queries.get()
    }
}

impl AccountStore for MemoryStore {
    fn active_accounts(&self) -> FlowResult<Vec<BankAccount>> {
        fail("accounts", self.failures.accounts, || {
            self.accounts.iter().filter(|a| a.is_active).cloned().collect()
        })
    }
}

impl IncomeStore for MemoryStore {
    fn active_sources(&self) -> FlowResult<Vec<IncomeSource>> {
        fail("income sources", self.failures.income_sources, || {
            self.income_sources.iter().filter(|s| s.is_active).cloned().collect()
        })
    }

    fn records_for_month(&self, year_month: YearMonth) -> FlowResult<Vec<MonthlyIncomeRecord>> {
        self.income_record_queries.set(self.income_record_queries.get() + 1);
        fail("income records", self.failures.income_records, || {
            self.income_records
                .iter()
                .filter(|r| r.year_month == year_month)
                .cloned()
                .collect()
        })
    }
}

impl RecurringPaymentStore for MemoryStore {
    fn active_payments(&self) -> FlowResult<Vec<RecurringPayment>> {
        fail("recurring payments", self.failures.recurring_payments, || {
            self.recurring_payments.iter().filter(|p| p.is_active).cloned().collect()
        })
    }
}

impl CardStore for MemoryStore {
    fn cards(&self) -> FlowResult<Vec<CreditCard>> {
        fail("cards", self.failures.cards, || self.cards.clone())
    }

    fn totals_for_card(&self, card_id: CreditCardId) -> FlowResult<Vec<CardMonthlyTotal>> {
        self.card_total_queries.set(self.card_total_queries.get() + 1);
        fail("card totals", self.failures.card_totals, || {
            self.card_totals
                .iter()
                .filter(|t| t.credit_card_id == card_id)
                .cloned()
                .collect()
        })
    }
}

impl SettingStore for MemoryStore {
    fn get(&self, key: &str) -> FlowResult<Option<String>> {
        fail("settings", self.failures.settings, || self.settings.get(key).cloned())
    }
}
