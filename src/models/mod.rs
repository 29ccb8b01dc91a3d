//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: expenses, money
//! amounts, month keys and budget comparisons.

pub mod budget;
pub mod expense;
pub mod money;
pub mod month;

pub use budget::{BudgetStatus, BudgetWarning};
pub use expense::{normalize_category, Expense, SUGGESTED_CATEGORIES};
pub use money::Money;
pub use month::{month_key, MonthMatching};
