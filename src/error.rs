//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A value that must be a positive amount was non-numeric or not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A delete selection that is not an integer
    #[error("Invalid selection: '{0}' is not a number")]
    InvalidIndex(String),

    /// A delete selection outside the current ledger
    #[error("Invalid selection: {position} is not between 1 and {len}")]
    OutOfRange { position: i64, len: usize },

    /// No budget has been set for the requested month
    #[error("No budget set for {0}")]
    BudgetNotSet(String),

    /// A month key that is not a valid "YYYY-MM" month (calendar matching only)
    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    /// A persistence read or write failed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an "invalid amount" error for a raw input value
    pub fn invalid_amount(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            Self::InvalidAmount("no amount given".into())
        } else {
            Self::InvalidAmount(format!("'{}' must be a positive number", raw.trim()))
        }
    }

    /// Create an "out of range" error for a delete selection
    pub fn out_of_range(position: i64, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    /// Check if this is an amount validation error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a bad delete selection (malformed or out of range)
    pub fn is_bad_selection(&self) -> bool {
        matches!(self, Self::InvalidIndex(_) | Self::OutOfRange { .. })
    }

    /// Check if this is a missing budget
    pub fn is_budget_not_set(&self) -> bool {
        matches!(self, Self::BudgetNotSet(_))
    }

    /// Check if this is a persistence failure
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
