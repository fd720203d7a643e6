//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod add;
pub mod menu;
pub mod report;
pub mod summary;

pub use add::{handle_add_command, AddArgs};
pub use menu::{Menu, MenuChoice};
pub use report::{handle_report_command, ReportArgs};
pub use summary::{handle_summary_command, view_summary, SummaryArgs};

use crate::chart::{self, CategoryChart};
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::storage::Ledger;

/// Run the interactive menu on standard input and output
pub fn run_interactive(ledger: &mut Ledger, settings: &Settings) -> BudgetResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Menu::new(
        ledger,
        settings,
        stdin.lock(),
        stdout.lock(),
        |to_show: &CategoryChart| chart::terminal::show(to_show, &settings.currency_symbol),
    )
    .run()
}
