//! Display formatting for terminal output
//!
//! Formats ledger rows, budget status and tables for the terminal.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_budget_status, format_budget_table};
pub use expense::{
    format_added, format_category_listing, format_category_totals, format_ledger,
    format_ledger_row,
};
