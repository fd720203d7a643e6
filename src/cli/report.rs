//! `report` command
//!
//! Prints the monthly report for a given or the current month.

use std::io::Write;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{MonthlyReport, Period};
use crate::services::today;
use crate::storage::Ledger;

/// Arguments for `report`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Year, defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,

    /// Month (1-12), defaults to the current month
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// Handle `report`, writing to `out`
pub fn handle_report_command<W: Write>(
    args: ReportArgs,
    settings: &Settings,
    ledger: &Ledger,
    out: &mut W,
) -> BudgetResult<()> {
    let period = Period::resolve(args.year, args.month, today())?;

    match MonthlyReport::generate(ledger.entries(), period) {
        Ok(report) => {
            writeln!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
        }
        Err(BudgetError::NoEntries) => writeln!(out, "No entries to report.")?,
        Err(e) if e.is_empty_state() => writeln!(out, "{}", e)?,
        Err(e) => return Err(e),
    }

    Ok(())
}
