//! Display formatting for terminal output

pub mod projection;

pub use projection::format_projection_table;
