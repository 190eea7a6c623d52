use anyhow::Result;
use clap::{Parser, Subcommand};

use flow_sight::cli::{handle_project_command, handle_summary_command, ProjectArgs, SummaryArgs};
use flow_sight::config::{FlowPaths, Preferences};
use flow_sight::logging::init_tracing;
use flow_sight::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "flowsight",
    version,
    about = "Personal cashflow tracker with a daily balance projection",
    long_about = "Flow Sight forecasts your bank balance day by day from income, \
                  recurring payments and credit card bills, so you can see \
                  the lean months coming."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the daily balance over the coming months
    #[command(alias = "cashflow")]
    Project(ProjectArgs),

    /// Show the dashboard summary for the current month
    Summary(SummaryArgs),

    /// Create the data directory, empty stores and default preferences
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FlowPaths::new()?;
    let prefs = Preferences::load_or_create(&paths)?;
    init_tracing(&prefs.log_filter);

    match cli.command {
        Some(Commands::Project(args)) => {
            let storage = open_storage(&paths)?;
            handle_project_command(&storage, &prefs, args)?;
        }
        Some(Commands::Summary(args)) => {
            let storage = open_storage(&paths)?;
            handle_summary_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Flow Sight at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Stores live in {}", paths.data_dir().display());
            println!("Run 'flowsight project --only-changes' to see the projection.");
        }
        Some(Commands::Config) => {
            println!("Flow Sight Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!();
            println!("Preferences:");
            println!("  Default months: {}", prefs.default_months.months());
            println!("  Only changes:   {}", prefs.only_changes);
            println!("  Output format:  {}", prefs.output_format);
            println!("  Log filter:     {}", prefs.log_filter);
        }
        None => {
            println!("Flow Sight - daily cashflow projection");
            println!();
            println!("Run 'flowsight --help' for usage information.");
        }
    }

    Ok(())
}

fn open_storage(paths: &FlowPaths) -> Result<Storage> {
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}
