//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for amounts, entry types, dates and categories
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The ledger holds no entries at all
    #[error("No entries yet.")]
    NoEntries,

    /// The ledger holds entries, but none fall in the requested month
    #[error("No entries for {year}-{month:02}.")]
    NoEntriesForPeriod { year: i32, month: u32 },

    /// There is nothing to draw a chart from
    #[error("No data to plot.")]
    NothingToPlot,

    /// Terminal/chart display errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error only reports that there was nothing to show
    ///
    /// These are informational and never fail the process.
    pub fn is_empty_state(&self) -> bool {
        matches!(
            self,
            Self::NoEntries | Self::NoEntriesForPeriod { .. } | Self::NothingToPlot
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
