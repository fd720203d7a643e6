//! Category breakdown
//!
//! Groups entries by category and sums income and expense separately within
//! each category. Feeds both the monthly report and the category chart.

use std::collections::BTreeMap;

use crate::models::{Entry, EntryKind, Money};

/// Income and expense sums for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of income entries (zero when there were none)
    pub income: Money,
    /// Sum of expense entries (zero when there were none)
    pub expense: Money,
    /// Number of income entries
    pub income_count: usize,
    /// Number of expense entries
    pub expense_count: usize,
}

impl CategoryTotal {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            income: Money::zero(),
            expense: Money::zero(),
            income_count: 0,
            expense_count: 0,
        }
    }

    fn add(&mut self, entry: &Entry) {
        match entry.kind() {
            EntryKind::Income => {
                self.income += entry.amount();
                self.income_count += 1;
            }
            EntryKind::Expense => {
                self.expense += entry.amount();
                self.expense_count += 1;
            }
        }
    }

    /// Sum for one kind
    pub fn amount(&self, kind: EntryKind) -> Money {
        match kind {
            EntryKind::Income => self.income,
            EntryKind::Expense => self.expense,
        }
    }
}

/// Per-category totals, ordered by category name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    rows: Vec<CategoryTotal>,
}

impl CategoryTotals {
    /// Group entries by category and kind
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut by_category: BTreeMap<&str, CategoryTotal> = BTreeMap::new();

        for entry in entries {
            by_category
                .entry(entry.category())
                .or_insert_with(|| CategoryTotal::new(entry.category()))
                .add(entry);
        }

        Self {
            rows: by_category.into_values().collect(),
        }
    }

    /// Only the categories that have expense entries, with their expense sums
    pub fn expense_only(&self) -> Vec<(&str, Money)> {
        self.rows
            .iter()
            .filter(|row| row.expense_count > 0)
            .map(|row| (row.category.as_str(), row.expense))
            .collect()
    }

    pub fn rows(&self) -> &[CategoryTotal] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over all categories for one kind
    pub fn total(&self, kind: EntryKind) -> Money {
        self.rows.iter().map(|row| row.amount(kind)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(kind: EntryKind, category: &str, cents: i64) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
            "",
        )
        .unwrap()
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry(EntryKind::Expense, "Rent", 50000),
            entry(EntryKind::Income, "Salary", 100000),
            entry(EntryKind::Expense, "Food", 3000),
            entry(EntryKind::Income, "Food", 500),
            entry(EntryKind::Expense, "Food", 2000),
        ]
    }

    #[test]
    fn test_groups_by_category_and_kind() {
        let totals = CategoryTotals::from_entries(&sample());

        let names: Vec<_> = totals.rows().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Rent", "Salary"]);

        let food = &totals.rows()[0];
        assert_eq!(food.expense.cents(), 5000);
        assert_eq!(food.income.cents(), 500);
        assert_eq!(food.expense_count, 2);
    }

    #[test]
    fn test_missing_kind_is_zero() {
        let totals = CategoryTotals::from_entries(&sample());

        let salary = &totals.rows()[2];
        assert_eq!(salary.expense, Money::zero());
        assert_eq!(salary.income.cents(), 100000);

        let rent = &totals.rows()[1];
        assert_eq!(rent.income, Money::zero());
    }

    #[test]
    fn test_category_sums_match_global_totals() {
        let entries = sample();
        let totals = CategoryTotals::from_entries(&entries);

        for kind in [EntryKind::Income, EntryKind::Expense] {
            let global: Money = entries
                .iter()
                .filter(|e| e.kind() == kind)
                .map(|e| e.amount())
                .sum();
            assert_eq!(totals.total(kind), global);
        }
    }

    #[test]
    fn test_expense_only() {
        let totals = CategoryTotals::from_entries(&sample());
        let expenses = totals.expense_only();

        assert_eq!(
            expenses,
            vec![
                ("Food", Money::from_cents(5000)),
                ("Rent", Money::from_cents(50000))
            ]
        );
    }

    #[test]
    fn test_empty() {
        let totals = CategoryTotals::from_entries(&[]);
        assert!(totals.is_empty());
        assert!(totals.expense_only().is_empty());
        assert_eq!(totals.total(EntryKind::Income), Money::zero());
    }
}
