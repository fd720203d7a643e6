//! Overall summary
//!
//! Total income, total expense and the remaining balance across the whole
//! ledger.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Entry, Money};

/// Totals over every entry in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub entry_count: usize,
}

impl Summary {
    /// Sum the ledger
    ///
    /// Returns [`BudgetError::NoEntries`] when there is nothing to sum, so an
    /// empty ledger is never reported as a zero balance.
    pub fn generate(entries: &[Entry]) -> BudgetResult<Self> {
        if entries.is_empty() {
            return Err(BudgetError::NoEntries);
        }

        let mut summary = Self {
            total_income: Money::zero(),
            total_expense: Money::zero(),
            entry_count: entries.len(),
        };

        for entry in entries {
            if entry.is_income() {
                summary.total_income += entry.amount();
            } else {
                summary.total_expense += entry.amount();
            }
        }

        Ok(summary)
    }

    /// Income minus expense
    pub fn balance(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        format!(
            "----- Summary -----\n\
             Total Income: {}\n\
             Total Expense: {}\n\
             Remaining Balance: {}\n",
            self.total_income.format_with_symbol(currency_symbol),
            self.total_expense.format_with_symbol(currency_symbol),
            self.balance().format_with_symbol(currency_symbol)
        )
    }
}
