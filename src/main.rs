use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_add_command, handle_report_command, handle_summary_command, run_interactive, AddArgs,
    ReportArgs, SummaryArgs,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "Budget Tracker records income and expense entries in a CSV ledger, \
                  prints overall and monthly summaries, and charts amounts by category. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Ledger CSV file (defaults to data.csv in the data directory)
    #[arg(long, global = true, env = "BUDGET_TRACKER_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an entry non-interactively
    Add(AddArgs),

    /// Show the monthly report
    Report(ReportArgs),

    /// Show overall totals
    Summary(SummaryArgs),

    /// Write a default settings file if none exists
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Paths and settings never fail a command; problems are logged
    let paths = BudgetPaths::new_or_current_dir();
    let settings = Settings::load_or_warn(&paths);
    let data_file = settings.data_file(&paths, cli.data_file);

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add_command(args, &settings, &data_file)?;
        }
        Some(Commands::Report(args)) => {
            let ledger = Ledger::load(&data_file);
            handle_report_command(args, &settings, &ledger, &mut std::io::stdout())?;
        }
        Some(Commands::Summary(args)) => {
            let ledger = Ledger::load(&data_file);
            handle_summary_command(args, &settings, &ledger)?;
        }
        Some(Commands::Init) => {
            if paths.settings_file().exists() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Created settings at: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            let mut ledger = Ledger::load(&data_file);
            run_interactive(&mut ledger, &settings)?;
        }
    }

    Ok(())
}
