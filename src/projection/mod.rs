//! Cashflow projection engine
//!
//! Forecasts the daily bank balance by replaying income, recurring payments and
//! card bills over a horizon of calendar months:
//!
//! - `snapshot` loads the read-only inputs from the collaborator stores
//! - `income` and `payments` decide what lands on each day
//! - `normalizer` tops late months up to the configured expense floor
//! - `engine` drives the simulation and keeps the running balance

pub mod engine;
pub mod horizon;
pub mod income;
pub mod lookup;
pub mod normalizer;
pub mod payments;
pub mod snapshot;
pub mod source;

#[cfg(test)]
pub(crate) mod fixture;

pub use engine::CashflowEngine;
pub use horizon::ProjectionHorizon;
pub use normalizer::MinimumExpense;
pub use snapshot::{IncomePlan, PlannedIncome, ProjectionSnapshot};
pub use source::{
    AccountStore, CardStore, IncomeStore, ProjectionStore, RecurringPaymentStore, SettingStore,
};
