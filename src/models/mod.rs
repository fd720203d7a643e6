//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the ledger:
//! monetary amounts and the income/expense entries recorded against them.

pub mod entry;
pub mod money;

pub use entry::{Entry, EntryKind};
pub use money::{Money, MoneyParseError};
