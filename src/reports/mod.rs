//! Reports module for Flow Sight

pub mod dashboard;

pub use dashboard::DashboardSummary;
