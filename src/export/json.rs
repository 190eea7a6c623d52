//! JSON export of projection rows
//!
//! The output is the plain array of rows, the same shape the projection
//! endpoint answers with.

use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::models::CashflowProjection;

/// Write projection rows as pretty-printed JSON
pub fn export_projection_json<W: Write>(
    rows: &[CashflowProjection],
    writer: &mut W,
) -> FlowResult<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)
        .map_err(|e| FlowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FlowError::Export(e.to_string()))?;
    Ok(())
}
