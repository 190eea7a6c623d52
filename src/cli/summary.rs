//! CLI command for the dashboard summary

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::error::{FlowError, FlowResult};
use crate::projection::ProjectionStore;
use crate::reports::DashboardSummary;

#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Summarize as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the `summary` command
pub fn handle_summary_command<S: ProjectionStore + ?Sized>(
    store: &S,
    args: SummaryArgs,
) -> FlowResult<()> {
    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let summary = DashboardSummary::generate(store, today)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| FlowError::Export(e.to_string()))?;
        println!("{}", json);
    } else {
        print!("{}", summary.format_terminal());
    }

    Ok(())
}
