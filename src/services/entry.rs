//! Entry service
//!
//! Records income and expense entries: turns raw user input into a validated
//! entry, appends it to the ledger and writes the ledger back to disk.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Entry, EntryKind, Money};
use crate::storage::Ledger;

/// Date formats tried after the configured one
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse an amount typed by the user
pub fn parse_amount(text: &str) -> BudgetResult<Money> {
    let amount = Money::parse(text).map_err(|_| {
        BudgetError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '42' or '19.99'",
            text.trim()
        ))
    })?;

    if amount.is_negative() {
        return Err(BudgetError::Validation(format!(
            "Invalid amount: '{}'. Amounts cannot be negative",
            text.trim()
        )));
    }

    if amount > Money::MAX_ENTRY {
        return Err(BudgetError::Validation(format!(
            "Invalid amount: '{}'. Amounts cannot exceed {}",
            text.trim(),
            Money::MAX_ENTRY
        )));
    }

    Ok(amount)
}

/// Parse an entry date, trying `format` first and then plain year-month-day
pub fn parse_date(text: &str, format: &str) -> BudgetResult<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, format)
        .ok()
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
        .ok_or_else(|| {
            BudgetError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", text))
        })
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Input for creating a new entry
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    pub kind: EntryKind,
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
}

impl CreateEntryInput {
    /// Build the entry, dating it `today` unless a date was given
    pub fn into_entry(self, today: NaiveDate) -> BudgetResult<Entry> {
        Entry::new(
            self.date.unwrap_or(today),
            self.kind,
            self.category,
            self.amount,
            self.description.unwrap_or_default(),
        )
    }
}

/// Service for recording entries
pub struct EntryService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Validate and record a new entry
    pub fn create(&mut self, input: CreateEntryInput) -> BudgetResult<Entry> {
        let entry = input.into_entry(today())?;
        Ok(self.record(entry))
    }

    /// Append an already validated entry and persist the ledger
    ///
    /// A failed save is logged by the ledger; the entry stays recorded in
    /// memory.
    pub fn record(&mut self, entry: Entry) -> Entry {
        self.ledger.append(entry.clone());
        self.ledger.persist();
        entry
    }
}

/// The line printed after an entry is recorded
pub fn format_confirmation(entry: &Entry, currency_symbol: &str) -> String {
    format!(
        "{} of {} added under {} on {}.",
        entry.kind(),
        entry.amount().format_with_symbol(currency_symbol),
        entry.category(),
        entry.date().format("%Y-%m-%d")
    )
}
