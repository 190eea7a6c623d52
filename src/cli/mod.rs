//! CLI command handlers
//!
//! Bridges clap argument parsing with the projection engine and reports.

pub mod project;
pub mod summary;

pub use project::{handle_project_command, ProjectArgs, ProjectionRequest};
pub use summary::{handle_summary_command, SummaryArgs};
