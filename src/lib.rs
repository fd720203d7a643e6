//! Budget Tracker - personal income and expense ledger
//!
//! This library provides the core functionality for the `budget` command:
//! recording income and expense entries in a CSV ledger, summarising them
//! overall and per month, and charting them by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, entries)
//! - `storage`: CSV ledger storage
//! - `services`: Entry recording
//! - `reports`: Summary, monthly report and category breakdown
//! - `chart`: Category bar charts in the terminal
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
//! use budget_tracker::storage::Ledger;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let ledger = Ledger::load(settings.data_file(&paths, None));
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
