//! `summary` command and the summary view shared with the menu
//!
//! Prints overall totals and optionally shows the category chart.

use std::io::Write;

use clap::Args;

use crate::chart::{self, CategoryChart, ChartStyle};
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{CategoryTotals, Summary};
use crate::storage::Ledger;

/// Arguments for `summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Also show a bar chart by category: `grouped` (default) or `expenses`
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "grouped")]
    pub chart: Option<ChartStyle>,
}

/// Print the summary, then hand the chart in `style` to `show_chart`
///
/// An empty ledger prints "No entries yet." and never reaches the chart. A
/// chart that cannot be displayed is reported without failing.
pub fn view_summary<W, F>(
    ledger: &Ledger,
    settings: &Settings,
    style: Option<ChartStyle>,
    out: &mut W,
    show_chart: &mut F,
) -> BudgetResult<()>
where
    W: Write,
    F: FnMut(&CategoryChart) -> BudgetResult<()>,
{
    let summary = match Summary::generate(ledger.entries()) {
        Ok(summary) => summary,
        Err(e) if e.is_empty_state() => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    writeln!(out)?;
    writeln!(out, "{}", summary.format_terminal(&settings.currency_symbol))?;

    let Some(style) = style else {
        return Ok(());
    };

    let totals = CategoryTotals::from_entries(ledger.entries());
    match style.build(&totals).and_then(|chart| show_chart(&chart)) {
        Ok(()) => {}
        Err(e) if e.is_empty_state() => writeln!(out, "{}", e)?,
        Err(BudgetError::Tui(msg)) => {
            log::warn!("chart display failed: {}", msg);
            writeln!(out, "Could not display chart: {}", msg)?;
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(
    args: SummaryArgs,
    settings: &Settings,
    ledger: &Ledger,
) -> BudgetResult<()> {
    let mut stdout = std::io::stdout();
    view_summary(
        ledger,
        settings,
        args.chart,
        &mut stdout,
        &mut |to_show: &CategoryChart| chart::terminal::show(to_show, &settings.currency_symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ledger_with(entries: &[(EntryKind, &str, i64)]) -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("data.csv"));
        for (kind, category, cents) in entries {
            ledger.append(
                Entry::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    *kind,
                    *category,
                    Money::from_cents(*cents),
                    "",
                )
                .unwrap(),
            );
        }
        (temp_dir, ledger)
    }

    #[test]
    fn test_empty_ledger_skips_chart() {
        let (_temp_dir, ledger) = ledger_with(&[]);
        let mut out = Vec::new();
        let mut charts = 0;

        view_summary(&ledger, &Settings::default(), Some(ChartStyle::Grouped), &mut out, &mut |_: &CategoryChart| {
            charts += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No entries yet.\n");
        assert_eq!(charts, 0);
    }

    #[test]
    fn test_summary_then_chart() {
        let (_temp_dir, ledger) = ledger_with(&[
            (EntryKind::Income, "Salary", 100000),
            (EntryKind::Expense, "Food", 20000),
        ]);
        let mut out = Vec::new();
        let mut shown = Vec::new();

        view_summary(&ledger, &Settings::default(), Some(ChartStyle::Grouped), &mut out, &mut |chart: &CategoryChart| {
            shown.push(chart.groups().len());
            Ok(())
        })
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total Income: $1000.00"));
        assert!(text.contains("Total Expense: $200.00"));
        assert!(text.contains("Remaining Balance: $800.00"));
        assert_eq!(shown, vec![2]);
    }

    #[test]
    fn test_chart_failure_is_reported() {
        let (_temp_dir, ledger) = ledger_with(&[(EntryKind::Income, "Salary", 100)]);
        let mut out = Vec::new();

        view_summary(&ledger, &Settings::default(), Some(ChartStyle::Grouped), &mut out, &mut |_: &CategoryChart| {
            Err(BudgetError::Tui("not a terminal".into()))
        })
        .unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Could not display chart: not a terminal"));
    }

    #[test]
    fn test_expenses_chart_and_empty_variant() {
        let (_temp_dir, ledger) = ledger_with(&[
            (EntryKind::Income, "Salary", 100000),
            (EntryKind::Expense, "Food", 20000),
        ]);
        let mut out = Vec::new();
        let mut titles = Vec::new();

        view_summary(&ledger, &Settings::default(), Some(ChartStyle::Expenses), &mut out, &mut |chart: &CategoryChart| {
            titles.push(chart.title().to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(titles, vec!["Expenses by Category"]);

        let (_temp_dir, income_only) = ledger_with(&[(EntryKind::Income, "Salary", 100)]);
        let mut out = Vec::new();
        view_summary(&income_only, &Settings::default(), Some(ChartStyle::Expenses), &mut out, &mut |_: &CategoryChart| {
            panic!("nothing should be drawn")
        })
        .unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("No data to plot.
"));
    }

    #[test]
    fn test_chart_flag_parsing() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: SummaryArgs,
        }

        let parse = |argv: &[&str]| Wrapper::try_parse_from(argv).unwrap().args.chart;
        assert_eq!(parse(&["summary"]), None);
        assert_eq!(parse(&["summary", "--chart"]), Some(ChartStyle::Grouped));
        assert_eq!(parse(&["summary", "--chart", "expenses"]), Some(ChartStyle::Expenses));
    }
}
