//! Storage layer for the budget tracker
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_csv, write_csv_atomic};
pub use ledger::{Ledger, LEDGER_HEADER};
