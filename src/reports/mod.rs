//! Reports module for the budget tracker
//!
//! Aggregates the ledger into the overall summary, the monthly report and
//! the per-category breakdown used by charts.

pub mod category;
pub mod monthly;
pub mod summary;

pub use category::{CategoryTotal, CategoryTotals};
pub use monthly::{MonthlyReport, Period};
pub use summary::Summary;
