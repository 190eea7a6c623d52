//! Projection display formatting
//!
//! Renders projection rows as a terminal table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::export::describe_details;
use crate::models::{CashflowProjection, Money};

#[derive(Tabled)]
struct ProjectionLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl From<&CashflowProjection> for ProjectionLine {
    fn from(row: &CashflowProjection) -> Self {
        Self {
            date: row.date.to_string(),
            income: blank_if_zero(row.income),
            expense: blank_if_zero(row.expense),
            balance: row.balance.to_string(),
            details: describe_details(row),
        }
    }
}

fn blank_if_zero(amount: Money) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.to_string()
    }
}

/// Format projection rows as a table, followed by the lowest balance reached
pub fn format_projection_table(rows: &[CashflowProjection]) -> String {
    if rows.is_empty() {
        return "No projected activity.".to_string();
    }

    let lines: Vec<ProjectionLine> = rows.iter().map(ProjectionLine::from).collect();
    let table = Table::new(lines)
        .with(Style::sharp())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    let mut output = table;
    output.push('\n');
    if let Some(lowest) = rows.iter().min_by_key(|r| r.balance) {
        output.push_str(&format!(
            "Lowest balance: {} on {}\n",
            lowest.balance, lowest.date
        ));
    }
    output
}
