//! Flow Sight - personal cashflow tracking with a daily balance projection
//!
//! This library provides the core of the Flow Sight application: a
//! deterministic day-by-day simulator that forecasts the bank balance over a
//! horizon of months from income schedules, recurring payments, credit-card
//! billing cycles and a minimum monthly expense floor.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and user preferences
//! - `error`: Custom error types
//! - `models`: Accounts, income, recurring payments, cards and projection rows
//! - `projection`: The projection engine and the stores it reads from
//! - `storage`: JSON file storage implementing those stores
//! - `reports`: Dashboard summary
//! - `display` / `export`: Table rendering and JSON, CSV, YAML writers
//! - `cli`: Command handlers for the `flowsight` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use flow_sight::config::FlowPaths;
//! use flow_sight::projection::{CashflowEngine, ProjectionHorizon};
//! use flow_sight::storage::Storage;
//!
//! let mut storage = Storage::new(FlowPaths::new()?)?;
//! storage.load_all()?;
//! let rows = CashflowEngine::new(&storage).project(ProjectionHorizon::default(), true)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod projection;
pub mod reports;
pub mod storage;

pub use error::{FlowError, FlowResult};
