//! Reports module for the expense tracker
//!
//! Aggregate views over the ledger and budget table.

pub mod summary;

pub use summary::MonthlySummary;
