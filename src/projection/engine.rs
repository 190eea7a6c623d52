//! Day-by-day cashflow simulation
//!
//! The engine walks every calendar day of the horizon, starting at day 1 of the
//! current month, and keeps a running balance seeded with the sum of active
//! account balances.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::error::{FlowError, FlowResult};
use crate::models::{CashflowProjection, Money, ProjectionDetail, YearMonth};

use super::horizon::ProjectionHorizon;
use super::income::resolve_income;
use super::lookup::Lookups;
use super::payments::{resolve_card, resolve_recurring};
use super::snapshot::ProjectionSnapshot;
use super::source::ProjectionStore;

/// Income and expense booked on one simulated day
#[derive(Debug, Default)]
struct DayActivity {
    income: Money,
    expense: Money,
    details: Vec<ProjectionDetail>,
}

impl DayActivity {
    /// Book a detail; `None` when the day's total leaves the `Money` range
    fn record(&mut self, detail: ProjectionDetail) -> Option<()> {
        let total = if detail.kind.is_expense() {
            &mut self.expense
        } else {
            &mut self.income
        };
        *total = total.checked_add(detail.amount)?;
        self.details.push(detail);
        Some(())
    }

    fn is_quiet(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }

    fn into_row(self, date: NaiveDate, balance: Money) -> CashflowProjection {
        CashflowProjection {
            date,
            income: self.income,
            expense: self.expense,
            balance,
            details: self.details,
        }
    }
}

fn out_of_range(date: NaiveDate) -> FlowError {
    FlowError::Validation(format!(
        "Projected amounts on {} exceed the supported range",
        date
    ))
}

/// Cashflow projection over a collaborator store
pub struct CashflowEngine<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ProjectionStore + ?Sized> CashflowEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Project from the local calendar date
    pub fn project(
        &self,
        horizon: ProjectionHorizon,
        only_changes: bool,
    ) -> FlowResult<Vec<CashflowProjection>> {
        self.project_from(Local::now().date_naive(), horizon, only_changes)
    }

    /// Project `horizon` months starting with the month containing `today`
    ///
    /// With `only_changes`, days without income or expense are left out of the
    /// result; the balance still carries across them.
    pub fn project_from(
        &self,
        today: NaiveDate,
        horizon: ProjectionHorizon,
        only_changes: bool,
    ) -> FlowResult<Vec<CashflowProjection>> {
        let snapshot = ProjectionSnapshot::load(self.store)?;
        let mut lookups = Lookups::new(self.store);

        let first_month = YearMonth::from_date(today);
        let mut balance = snapshot.opening_balance;
        let mut rows = Vec::new();

        for month_offset in 0..horizon.months() {
            let month = first_month.add_months(month_offset);
            let mut month_expense = Money::zero();

            for date in month.days() {
                let mut day = DayActivity::default();

                for income in &snapshot.incomes {
                    if let Some(detail) = resolve_income(income, date, &mut lookups) {
                        day.record(detail).ok_or_else(|| out_of_range(date))?;
                    }
                }
                for payment in &snapshot.recurring_payments {
                    if let Some(detail) = resolve_recurring(payment, date) {
                        day.record(detail).ok_or_else(|| out_of_range(date))?;
                    }
                }
                for card in &snapshot.cards {
                    if let Some(detail) = resolve_card(card, date, &mut lookups) {
                        day.record(detail).ok_or_else(|| out_of_range(date))?;
                    }
                }

                month_expense = month_expense
                    .checked_add(day.expense)
                    .ok_or_else(|| out_of_range(date))?;
                if let Some(adjustment) =
                    snapshot
                        .minimum_expense
                        .adjustment(month_offset, date.day(), month_expense)
                {
                    month_expense += adjustment.amount;
                    day.record(adjustment).ok_or_else(|| out_of_range(date))?;
                }

                balance = balance
                    .checked_add(day.income)
                    .and_then(|b| b.checked_sub(day.expense))
                    .ok_or_else(|| out_of_range(date))?;
                if only_changes && day.is_quiet() {
                    continue;
                }
                rows.push(day.into_row(date, balance));
            }
        }

        debug!(
            from = %first_month,
            months = horizon.months(),
            rows = rows.len(),
            closing_balance = %balance,
            "projection complete"
        );

        Ok(rows)
    }
}
