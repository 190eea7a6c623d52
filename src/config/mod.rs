//! Configuration module for Flow Sight
//!
//! This module provides:
//! - Path resolution for the preferences file and the data stores
//! - User preferences persistence

pub mod paths;
pub mod preferences;

pub use paths::FlowPaths;
pub use preferences::{OutputFormat, Preferences};
