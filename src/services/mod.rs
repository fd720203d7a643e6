//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input parsing, validation and persistence.

pub mod entry;

pub use entry::{
    format_confirmation, parse_amount, parse_date, today, CreateEntryInput, EntryService,
};
