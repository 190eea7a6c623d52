//! Projection input snapshot
//!
//! Everything the simulation reads up front: the opening balance, the active
//! income sources with their schedules resolved, the active recurring payments,
//! the cards and the minimum-expense floor.

use tracing::{debug, warn};

use crate::error::{FlowError, FlowResult};
use crate::models::{
    CreditCard, IncomeSource, IncomeType, Money, RecurringPayment, ScheduledOn,
    MINIMUM_MONTHLY_EXPENSE,
};

use super::normalizer::MinimumExpense;
use super::source::ProjectionStore;

/// How an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomePlan {
    /// Every month on `pay_day`
    Monthly { pay_day: u32 },
    /// Once, per the resolved schedule
    OneTime(ScheduledOn),
}

/// An active income source with its schedule resolved
#[derive(Debug, Clone)]
pub struct PlannedIncome {
    pub source: IncomeSource,
    pub plan: IncomePlan,
}

impl PlannedIncome {
    pub fn new(source: IncomeSource) -> Self {
        let plan = match source.income_type {
            IncomeType::MonthlyFixed => IncomePlan::Monthly {
                pay_day: source.pay_day(),
            },
            IncomeType::OneTime => IncomePlan::OneTime(source.one_time_schedule()),
        };
        Self { source, plan }
    }
}

/// Flat, read-only input of one projection
#[derive(Debug, Clone, Default)]
pub struct ProjectionSnapshot {
    /// Sum of active account balances
    pub opening_balance: Money,
    pub incomes: Vec<PlannedIncome>,
    pub recurring_payments: Vec<RecurringPayment>,
    pub cards: Vec<CreditCard>,
    pub minimum_expense: MinimumExpense,
}

impl ProjectionSnapshot {
    /// Load the snapshot from the collaborator stores
    ///
    /// Accounts, income sources, recurring payments and cards must all load. A
    /// failing setting lookup only disables the minimum-expense floor.
    pub fn load<S: ProjectionStore + ?Sized>(store: &S) -> FlowResult<Self> {
        let opening_balance = store
            .active_accounts()?
            .iter()
            .filter(|account| account.is_active)
            .try_fold(Money::zero(), |total, account| total.checked_add(account.balance))
            .ok_or_else(|| {
                FlowError::Validation("Account balances exceed the supported range".into())
            })?;

        let incomes: Vec<PlannedIncome> = store
            .active_sources()?
            .into_iter()
            .filter(|source| source.is_active)
            .map(PlannedIncome::new)
            .collect();

        for income in &incomes {
            if income.plan == IncomePlan::OneTime(ScheduledOn::Skip) {
                warn!(
                    source = %income.source.name,
                    scheduled_date = income.source.scheduled_date.as_deref().unwrap_or_default(),
                    "unreadable scheduled date, skipping one-time income"
                );
            }
        }

        let recurring_payments: Vec<RecurringPayment> = store
            .active_payments()?
            .into_iter()
            .filter(|payment| payment.is_active)
            .collect();

        let cards = store.cards()?;

        let minimum_expense = match store.get(MINIMUM_MONTHLY_EXPENSE) {
            Ok(raw) => MinimumExpense::from_setting(raw.as_deref()),
            Err(err) => {
                warn!(error = %err, "minimum monthly expense lookup failed, floor disabled");
                MinimumExpense::disabled()
            }
        };

        debug!(
            opening_balance = %opening_balance,
            incomes = incomes.len(),
            recurring_payments = recurring_payments.len(),
            cards = cards.len(),
            minimum_expense = %minimum_expense.floor(),
            "loaded projection snapshot"
        );

        Ok(Self {
            opening_balance,
            incomes,
            recurring_payments,
            cards,
            minimum_expense,
        })
    }
}
