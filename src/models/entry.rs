//! Ledger entry model
//!
//! An entry is one recorded income or expense. Entries are validated when
//! they are built and never change afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Whether money came in or went out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
pub enum EntryKind {
    #[value(name = "Income", alias = "income")]
    Income,
    #[value(name = "Expense", alias = "expense")]
    Expense,
}

impl EntryKind {
    /// The literal text written to the ledger file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(BudgetError::Validation(format!(
                "Invalid entry type: '{}'. Use Income or Expense",
                s
            ))),
        }
    }
}

/// One recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    date: NaiveDate,
    kind: EntryKind,
    category: String,
    amount: Money,
    description: String,
}

impl Entry {
    /// Build a validated entry
    ///
    /// The category is trimmed and must not be empty. The amount must not be
    /// negative or above [`Money::MAX_ENTRY`].
    pub fn new(
        date: NaiveDate,
        kind: EntryKind,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<Self> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(BudgetError::Validation(
                "Category cannot be empty".to_string(),
            ));
        }

        if amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Amount cannot be negative: {}",
                amount
            )));
        }

        if amount > Money::MAX_ENTRY {
            return Err(BudgetError::Validation(format!(
                "Amount too large: {}. The limit is {}",
                amount,
                Money::MAX_ENTRY
            )));
        }

        Ok(Self {
            date,
            kind,
            category,
            amount,
            description: description.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(
            date(2024, 3, 5),
            EntryKind::Expense,
            "  Food ",
            Money::from_cents(3000),
            "Groceries",
        )
        .unwrap();

        assert_eq!(entry.category(), "Food");
        assert_eq!(entry.amount().cents(), 3000);
        assert!(entry.is_expense());
        assert!(!entry.is_income());
        assert_eq!(entry.description(), "Groceries");
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Entry::new(
            date(2024, 3, 5),
            EntryKind::Income,
            "   ",
            Money::from_cents(100),
            "",
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Entry::new(
            date(2024, 3, 5),
            EntryKind::Expense,
            "Food",
            Money::from_cents(-100),
            "",
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let at_limit = Entry::new(
            date(2024, 3, 5),
            EntryKind::Income,
            "Windfall",
            Money::MAX_ENTRY,
            "",
        );
        assert!(at_limit.is_ok());

        let err = Entry::new(
            date(2024, 3, 5),
            EntryKind::Income,
            "Windfall",
            Money::from_cents(9_000_000_000_000_000),
            "",
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert!(Entry::new(date(2024, 1, 1), EntryKind::Income, "Gift", Money::zero(), "").is_ok());
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("Income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert!("Transfer".parse::<EntryKind>().unwrap_err().is_validation());
        assert_eq!(EntryKind::Expense.to_string(), "Expense");
    }
}
