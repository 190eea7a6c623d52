//! Dashboard Summary
//!
//! Current balance, this month's projected income and expense, and the first
//! few days of the month that move money.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FlowResult;
use crate::models::{CashflowProjection, Money};
use crate::projection::{CashflowEngine, ProjectionHorizon, ProjectionStore};

/// Number of activity rows shown on the dashboard
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Sum of active account balances
    pub total_balance: Money,
    /// Projected income of the current month
    pub monthly_income: Money,
    /// Projected expense of the current month
    pub monthly_expense: Money,
    /// Number of accounts plus number of cards
    pub total_assets: usize,
    pub recent_activities: Vec<CashflowProjection>,
}

impl DashboardSummary {
    /// Generate the summary for the month containing `today`
    ///
    /// The monthly figures come from a one-month projection, so any store
    /// failure that stops the projection fails the summary too. Missing income
    /// records or card totals only drop those items, as in the projection.
    pub fn generate<S: ProjectionStore + ?Sized>(store: &S, today: NaiveDate) -> FlowResult<Self> {
        let accounts = store.active_accounts()?;
        let cards = store.cards()?;

        let total_balance = accounts.iter().map(|a| a.balance).sum();
        let total_assets = accounts.len() + cards.len();

        let rows =
            CashflowEngine::new(store).project_from(today, ProjectionHorizon::new(1)?, true)?;

        let monthly_income = rows.iter().map(|r| r.income).sum();
        let monthly_expense = rows.iter().map(|r| r.expense).sum();
        let recent_activities = rows.into_iter().take(RECENT_ACTIVITY_LIMIT).collect();

        Ok(Self {
            total_balance,
            monthly_income,
            monthly_expense,
            total_assets,
            recent_activities,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!("Total Balance:    {:>15}\n", self.total_balance));
        output.push_str(&format!("Monthly Income:   {:>15}\n", self.monthly_income));
        output.push_str(&format!("Monthly Expense:  {:>15}\n", self.monthly_expense));
        output.push_str(&format!("Total Assets:     {:>15}\n", self.total_assets));
        output.push('\n');

        if self.recent_activities.is_empty() {
            output.push_str("No activity this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>12} {:>12} {:>14}\n",
            "Date", "Income", "Expense", "Balance"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for row in &self.recent_activities {
            output.push_str(&format!(
                "{:<12} {:>12} {:>12} {:>14}\n",
                row.date.to_string(),
                row.income,
                row.expense,
                row.balance
            ));
        }

        output
    }
}
