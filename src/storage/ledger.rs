//! Ledger repository for CSV storage
//!
//! Holds the ordered list of entries in memory and mirrors it to a CSV file
//! with the columns `Date,Type,Category,Amount,Description`.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Entry, EntryKind, Money};

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of the ledger file
pub const LEDGER_HEADER: &[&str] = &["Date", "Type", "Category", "Amount", "Description"];

/// One row of the ledger file, kept as text until it is validated
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description", default)]
    description: String,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date().format("%Y-%m-%d").to_string(),
            kind: entry.kind().to_string(),
            category: entry.category().to_string(),
            amount: entry.amount().to_decimal_string(),
            description: entry.description().to_string(),
        }
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = BudgetError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let date = parse_stored_date(&record.date)?;
        let kind: EntryKind = record.kind.parse()?;
        let amount = Money::parse(&record.amount).map_err(|e| {
            BudgetError::Validation(format!("Invalid amount '{}': {}", record.amount, e))
        })?;
        Entry::new(date, kind, record.category, amount, record.description)
    }
}

/// Parse a stored date, tolerating a midnight time suffix
fn parse_stored_date(s: &str) -> BudgetResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| BudgetError::Validation(format!("Invalid date: '{}'", s)))
}

/// The in-memory ledger and its backing file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl Ledger {
    /// Create an empty ledger backed by `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing file gives an empty ledger. A file that cannot be read or
    /// holds any malformed row is discarded with a warning and the ledger
    /// starts empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut ledger = Self::new(path);

        match ledger.read_entries() {
            Ok(entries) => {
                log::debug!(
                    "loaded {} entries from {}",
                    entries.len(),
                    ledger.path.display()
                );
                ledger.entries = entries;
            }
            Err(e) => {
                log::warn!(
                    "ignoring unreadable ledger {}, starting empty: {}",
                    ledger.path.display(),
                    e
                );
            }
        }

        ledger
    }

    fn read_entries(&self) -> BudgetResult<Vec<Entry>> {
        let records: Vec<EntryRecord> = read_csv(&self.path, LEDGER_HEADER)?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                // Header is line 1
                Entry::try_from(record).map_err(|e| {
                    BudgetError::Storage(format!("Bad row at line {}: {}", index + 2, e))
                })
            })
            .collect()
    }

    /// Add an entry at the end of the ledger
    pub fn append(&mut self, entry: Entry) {
        log::debug!(
            "appending {} {} in '{}'",
            entry.kind(),
            entry.amount(),
            entry.category()
        );
        self.entries.push(entry);
    }

    /// Write every entry to the backing file
    pub fn save(&self) -> BudgetResult<()> {
        let records: Vec<EntryRecord> = self.entries.iter().map(EntryRecord::from).collect();
        write_csv_atomic(&self.path, LEDGER_HEADER, &records)
    }

    /// Save, logging instead of failing
    ///
    /// Returns whether the file was written. The in-memory entries are kept
    /// either way.
    pub fn persist(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to save data to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
