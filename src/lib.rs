//! Expense Tracker - personal expense ledger with monthly budgets
//!
//! This library records spending events, persists them as JSON and answers
//! aggregate questions: totals by month and by category, and how a month's
//! spending compares with its budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, money amounts, month keys and budget comparisons
//! - `storage`: JSON file stores and the per-run session context
//! - `services`: Ledger and budget business logic
//! - `audit`: Append-only audit log of mutations
//! - `reports`: Monthly summary
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::{CreateExpenseInput, LedgerService};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all();
//!
//! let input = CreateExpenseInput::parse("12.50", "food", "lunch", "2024-03-15")?;
//! LedgerService::new(&mut storage).add(input)?;
//! storage.save_expenses()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
