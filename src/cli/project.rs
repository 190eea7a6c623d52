//! CLI command for the cashflow projection
//!
//! Mirrors `GET /cashflow-projection?months=..&onlyChanges=..`: months default
//! to the preferences, counts above 120 are clamped and counts below 1 are
//! rejected before the engine runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use crate::config::{OutputFormat, Preferences};
use crate::display::format_projection_table;
use crate::error::{FlowError, FlowResult};
use crate::export::{export_projection_csv, export_projection_json, export_projection_yaml};
use crate::models::CashflowProjection;
use crate::projection::{CashflowEngine, ProjectionHorizon, ProjectionStore};

#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Number of months to project (1-120, larger values are clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    pub months: Option<i64>,

    /// Only show days with income or expense
    #[arg(long)]
    pub only_changes: bool,

    /// Show every day, even when the preferences enable only-changes
    #[arg(long, conflicts_with = "only_changes")]
    pub all_days: bool,

    /// Output format: table, json, csv or yaml
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Resolved projection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionRequest {
    pub today: NaiveDate,
    pub horizon: ProjectionHorizon,
    pub only_changes: bool,
    pub format: OutputFormat,
}

impl ProjectionRequest {
    /// Combine command-line arguments with the stored preferences
    pub fn resolve(args: &ProjectArgs, prefs: &Preferences) -> FlowResult<Self> {
        let horizon = match args.months {
            Some(months) => ProjectionHorizon::from_request(months)?,
            None => prefs.default_months,
        };

        Ok(Self {
            today: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
            horizon,
            only_changes: !args.all_days && (args.only_changes || prefs.only_changes),
            format: args.format.unwrap_or(prefs.output_format),
        })
    }
}

/// Handle the `project` command
pub fn handle_project_command<S: ProjectionStore + ?Sized>(
    store: &S,
    prefs: &Preferences,
    args: ProjectArgs,
) -> FlowResult<()> {
    let request = ProjectionRequest::resolve(&args, prefs)?;
    let rows = CashflowEngine::new(store).project_from(
        request.today,
        request.horizon,
        request.only_changes,
    )?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FlowError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            render(&rows, request.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FlowError::Export(e.to_string()))?;
            info!(path = %path.display(), rows = rows.len(), "wrote projection");
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render(&rows, request.format, &mut handle)?;
        }
    }

    Ok(())
}

fn render<W: Write>(
    rows: &[CashflowProjection],
    format: OutputFormat,
    writer: &mut W,
) -> FlowResult<()> {
    match format {
        OutputFormat::Table => write!(writer, "{}", format_projection_table(rows))
            .map_err(|e| FlowError::Export(e.to_string())),
        OutputFormat::Json => export_projection_json(rows, writer),
        OutputFormat::Csv => export_projection_csv(rows, writer),
        OutputFormat::Yaml => export_projection_yaml(rows, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, IncomeSource, Money};
    use crate::projection::fixture::MemoryStore;

    fn as_of() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 5, 18)
    }

    #[test]
    fn test_resolve_uses_preferences() {
        let mut prefs = Preferences::default();
        prefs.only_changes = true;
        prefs.output_format = OutputFormat::Json;

        let request = ProjectionRequest::resolve(&ProjectArgs::default(), &prefs).unwrap();
        assert_eq!(request.horizon.months(), 36);
        assert!(request.only_changes);
        assert_eq!(request.format, OutputFormat::Json);
    }

    #[test]
    fn test_all_days_overrides_preferences() {
        let mut prefs = Preferences::default();
        prefs.only_changes = true;
        let args = ProjectArgs {
            all_days: true,
            ..Default::default()
        };

        assert!(!ProjectionRequest::resolve(&args, &prefs).unwrap().only_changes);

        let store = MemoryStore::new();
        let request = ProjectionRequest::resolve(
            &ProjectArgs {
                all_days: true,
                as_of: as_of(),
                ..Default::default()
            },
            &prefs,
        )
        .unwrap();
        let rows = CashflowEngine::new(&store)
            .project_from(request.today, ProjectionHorizon::new(1).unwrap(), request.only_changes)
            .unwrap();
        assert_eq!(rows.len(), 31);
    }

    #[test]
    fn test_resolve_clamps_and_rejects_months() {
        let prefs = Preferences::default();
        let clamp = ProjectArgs {
            months: Some(200),
            as_of: as_of(),
            ..Default::default()
        };
        assert_eq!(
            ProjectionRequest::resolve(&clamp, &prefs).unwrap().horizon.months(),
            120
        );

        let zero = ProjectArgs {
            months: Some(0),
            ..Default::default()
        };
        assert!(ProjectionRequest::resolve(&zero, &prefs)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_render_formats() {
        let store = MemoryStore::new()
            .with_account(BankAccount::new("Main", Money::from_minor(1000)))
            .with_income_source(IncomeSource::monthly_fixed("Salary", Money::from_minor(300000)));
        let rows = CashflowEngine::new(&store)
            .project_from(as_of().unwrap(), ProjectionHorizon::new(1).unwrap(), true)
            .unwrap();

        let mut json = Vec::new();
        render(&rows, OutputFormat::Json, &mut json).unwrap();
        assert!(String::from_utf8(json).unwrap().contains("\"balance\": 301000"));

        let mut csv = Vec::new();
        render(&rows, OutputFormat::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().contains("2024-05-25,300000,0,301000"));

        let mut table = Vec::new();
        render(&rows, OutputFormat::Table, &mut table).unwrap();
        assert!(String::from_utf8(table).unwrap().contains("収入: Salary"));
    }

    #[test]
    fn test_writes_output_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("projection.json");
        let store = MemoryStore::new();
        let args = ProjectArgs {
            months: Some(1),
            format: Some(OutputFormat::Json),
            output: Some(path.clone()),
            as_of: as_of(),
            ..Default::default()
        };

        handle_project_command(&store, &Preferences::default(), args).unwrap();

        let rows: Vec<CashflowProjection> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(rows.len(), 31);
    }
}
