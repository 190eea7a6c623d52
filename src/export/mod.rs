//! Export module for Flow Sight
//!
//! Writes projection rows in machine-readable formats:
//! - CSV: one line per day (spreadsheet-compatible)
//! - JSON: the projection response shape
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{describe_details, export_projection_csv};
pub use self::json::export_projection_json;
pub use self::yaml::export_projection_yaml;
