//! Monthly report
//!
//! Income, expense and net for one calendar month, plus the month's
//! expenses broken down by category.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use super::category::{CategoryTotal, CategoryTotals};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Entry, Money};

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> BudgetResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(BudgetError::Validation(format!(
                "Invalid month: {}. Use 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Fill in whichever of year and month is missing from `today`
    ///
    /// Each component defaults on its own, so `--month 3` alone means March
    /// of the current year.
    pub fn resolve(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> BudgetResult<Self> {
        Self::new(
            year.unwrap_or_else(|| today.year()),
            month.unwrap_or_else(|| today.month()),
        )
    }

    /// Whether `date` falls inside this calendar month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Report for a single month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub period: Period,
    pub income: Money,
    pub expense: Money,
    /// Expense totals per category, sorted by category name
    pub expenses_by_category: Vec<CategoryTotal>,
    pub entry_count: usize,
}

impl MonthlyReport {
    /// Generate the report for `period`
    ///
    /// An empty ledger gives [`BudgetError::NoEntries`]; a ledger with nothing
    /// in the month gives [`BudgetError::NoEntriesForPeriod`].
    pub fn generate(entries: &[Entry], period: Period) -> BudgetResult<Self> {
        if entries.is_empty() {
            return Err(BudgetError::NoEntries);
        }

        let in_period: Vec<&Entry> = entries
            .iter()
            .filter(|entry| period.contains(entry.date()))
            .collect();

        if in_period.is_empty() {
            return Err(BudgetError::NoEntriesForPeriod {
                year: period.year,
                month: period.month,
            });
        }

        let income = in_period
            .iter()
            .filter(|e| e.is_income())
            .map(|e| e.amount())
            .sum();
        let expense = in_period
            .iter()
            .filter(|e| e.is_expense())
            .map(|e| e.amount())
            .sum();

        let expenses_by_category =
            CategoryTotals::from_entries(in_period.iter().copied().filter(|e| e.is_expense()))
                .rows()
                .to_vec();

        Ok(Self {
            period,
            income,
            expense,
            expenses_by_category,
            entry_count: in_period.len(),
        })
    }

    /// Income minus expense for the month
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("--- Monthly Report for {} ---\n", self.period));
        output.push_str(&format!(
            "Income: {}\n",
            self.income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Expense: {}\n",
            self.expense.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Net: {}\n",
            self.net().format_with_symbol(currency_symbol)
        ));

        if !self.expenses_by_category.is_empty() {
            let rows = self.expenses_by_category.iter().map(|row| CategoryRow {
                category: row.category.clone(),
                amount: row.expense.format_with_symbol(currency_symbol),
            });

            let table = Table::new(rows)
                .with(Style::psql())
                .with(Modify::new(Columns::single(1)).with(Alignment::right()))
                .to_string();

            output.push('\n');
            output.push_str("Expenses by category:\n");
            output.push_str(&table);
            output.push('\n');
        }

        output
    }
}
