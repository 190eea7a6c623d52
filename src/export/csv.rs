//! CSV export of projection rows
//!
//! One line per day; the day's line items are joined into a single column.

use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::models::CashflowProjection;

const HEADER: [&str; 5] = ["Date", "Income", "Expense", "Balance", "Details"];

/// Write projection rows as CSV
pub fn export_projection_csv<W: Write>(
    rows: &[CashflowProjection],
    writer: &mut W,
) -> FlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for row in rows {
        csv_writer.write_record([
            row.date.to_string(),
            row.income.to_string(),
            row.expense.to_string(),
            row.balance.to_string(),
            describe_details(row),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| FlowError::Export(e.to_string()))?;
    Ok(())
}

/// The day's line items as `description (amount)`, joined with `; `
pub fn describe_details(row: &CashflowProjection) -> String {
    row.details
        .iter()
        .map(|d| format!("{} ({})", d.description, d.amount))
        .collect::<Vec<_>>()
        .join("; ")
}
