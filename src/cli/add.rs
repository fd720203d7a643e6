//! `add` command
//!
//! Records one entry from command-line arguments. Every argument is
//! validated before the ledger file is opened.

use std::path::Path;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{Entry, EntryKind};
use crate::services::{
    format_confirmation, parse_amount, parse_date, today, CreateEntryInput, EntryService,
};
use crate::storage::Ledger;

/// Arguments for `add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Entry type
    #[arg(long = "type", value_enum)]
    pub kind: EntryKind,

    /// Category name (e.g., Food, Rent, Salary)
    #[arg(long)]
    pub category: String,

    /// Amount (e.g., "42" or "19.99")
    #[arg(long)]
    pub amount: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

impl AddArgs {
    /// Parse and validate the arguments into an entry
    pub fn into_entry(self, settings: &Settings) -> BudgetResult<Entry> {
        let amount = parse_amount(&self.amount)?;
        let date = self
            .date
            .as_deref()
            .map(|text| parse_date(text, &settings.date_format))
            .transpose()?;

        CreateEntryInput {
            kind: self.kind,
            category: self.category,
            amount,
            description: Some(self.description),
            date,
        }
        .into_entry(today())
    }
}

/// Handle `add`
pub fn handle_add_command(args: AddArgs, settings: &Settings, data_file: &Path) -> BudgetResult<()> {
    let entry = args.into_entry(settings)?;

    let mut ledger = Ledger::load(data_file);
    let entry = EntryService::new(&mut ledger).record(entry);

    println!("{}", format_confirmation(&entry, &settings.currency_symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn args(amount: &str, date: Option<&str>) -> AddArgs {
        AddArgs {
            kind: EntryKind::Expense,
            category: "Food".to_string(),
            amount: amount.to_string(),
            description: "Lunch".to_string(),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_into_entry() {
        let entry = args("12.50", Some("2024-03-05"))
            .into_entry(&Settings::default())
            .unwrap();

        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(entry.amount().cents(), 1250);
        assert_eq!(entry.description(), "Lunch");
    }

    #[test]
    fn test_bad_amount_never_touches_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        let err = handle_add_command(args("abc", None), &Settings::default(), &path).unwrap_err();

        assert!(err.is_validation());
        assert!(!path.exists());
    }

    #[test]
    fn test_bad_date_never_touches_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        let err = handle_add_command(args("10", Some("03/05/2024")), &Settings::default(), &path)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(!path.exists());
    }

    #[test]
    fn test_add_appends_to_existing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        handle_add_command(args("10", Some("2024-03-01")), &Settings::default(), &path).unwrap();
        handle_add_command(args("20", Some("2024-03-02")), &Settings::default(), &path).unwrap();

        let ledger = Ledger::load(&path);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[1].amount().cents(), 2000);
    }
}
