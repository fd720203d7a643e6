//! Interactive menu
//!
//! A numbered menu read from standard input: add income, add expense, view
//! the summary with its chart, or exit. Input and output are generic so the
//! loop can be driven from tests.

use std::io::{BufRead, Write};

use crate::chart::{CategoryChart, ChartStyle};
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{EntryKind, Money};
use crate::services::{format_confirmation, parse_amount, CreateEntryInput, EntryService};
use crate::storage::Ledger;

use super::summary::view_summary;

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewSummary,
    Exit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddIncome),
            "2" => Some(Self::AddExpense),
            "3" => Some(Self::ViewSummary),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu loop and everything it needs
pub struct Menu<'a, R, W, F> {
    ledger: &'a mut Ledger,
    settings: &'a Settings,
    input: R,
    output: W,
    show_chart: F,
}

impl<'a, R, W, F> Menu<'a, R, W, F>
where
    R: BufRead,
    W: Write,
    F: FnMut(&CategoryChart) -> BudgetResult<()>,
{
    pub fn new(
        ledger: &'a mut Ledger,
        settings: &'a Settings,
        input: R,
        output: W,
        show_chart: F,
    ) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
            show_chart,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        loop {
            writeln!(self.output, "1. Add Income")?;
            writeln!(self.output, "2. Add Expense")?;
            writeln!(self.output, "3. View Summary")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddIncome) => self.add_entry(EntryKind::Income)?,
                Some(MenuChoice::AddExpense) => self.add_entry(EntryKind::Expense)?,
                Some(MenuChoice::ViewSummary) => view_summary(
                    self.ledger,
                    self.settings,
                    Some(ChartStyle::Grouped),
                    &mut self.output,
                    &mut self.show_chart,
                )?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice, try again.\n")?,
            }
        }
    }

    /// Print `text` and read one line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Ask for category, amount and description, then record the entry
    fn add_entry(&mut self, kind: EntryKind) -> BudgetResult<()> {
        let Some(category) = self.prompt_category()? else {
            return self.cancelled();
        };
        let Some(amount) = self.prompt_amount()? else {
            return self.cancelled();
        };
        let Some(description) = self.prompt("Enter a short description: ")? else {
            return self.cancelled();
        };

        let input = CreateEntryInput {
            kind,
            category,
            amount,
            description: Some(description),
            date: None,
        };

        match EntryService::new(self.ledger).create(input) {
            Ok(entry) => {
                let line = format_confirmation(&entry, &self.settings.currency_symbol);
                writeln!(self.output, "{}\n", line)?;
            }
            Err(e) if e.is_validation() => writeln!(self.output, "{}\n", e)?,
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn prompt_category(&mut self) -> BudgetResult<Option<String>> {
        loop {
            let Some(category) = self.prompt("Enter category (e.g., Food, Rent, Salary): ")?
            else {
                return Ok(None);
            };
            if !category.trim().is_empty() {
                return Ok(Some(category));
            }
            writeln!(self.output, "Category cannot be empty.")?;
        }
    }

    fn prompt_amount(&mut self) -> BudgetResult<Option<Money>> {
        loop {
            let Some(text) = self.prompt("Enter amount: ")? else {
                return Ok(None);
            };
            match parse_amount(&text) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn cancelled(&mut self) -> BudgetResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Entry cancelled.")?;
        Ok(())
    }
}
