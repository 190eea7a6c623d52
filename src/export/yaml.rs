//! YAML export of projection rows

use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::models::CashflowProjection;

/// Write projection rows as YAML, preceded by a short header comment
pub fn export_projection_yaml<W: Write>(
    rows: &[CashflowProjection],
    writer: &mut W,
) -> FlowResult<()> {
    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        writeln!(writer, "# Flow Sight cashflow projection {} to {}", first.date, last.date)
            .map_err(|e| FlowError::Export(e.to_string()))?;
    }

    serde_yaml::to_writer(writer, rows)?;
    Ok(())
}
