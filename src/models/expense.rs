//! Expense model
//!
//! A single spending event. Expenses are created once, never edited in place,
//! and addressed by their position in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::month_key;
use crate::error::ExpenseResult;

/// Categories offered as suggestions when entering an expense
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Other"];

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, always positive
    pub amount: Money,

    /// Free-text category, normalized at entry
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Date as entered, conventionally `YYYY-MM-DD`
    pub date: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// The category is normalized with [`normalize_category`]. Description and
    /// date are stored as given.
    pub fn new(
        amount: Money,
        category: impl AsRef<str>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> ExpenseResult<Self> {
        let amount = amount.ensure_valid()?;

        Ok(Self {
            amount,
            category: normalize_category(category.as_ref()),
            description: description.into(),
            date: date.into(),
        })
    }

    /// The month key (`YYYY-MM`) this expense is grouped under
    pub fn month(&self) -> &str {
        month_key(&self.date)
    }

    /// Short human-readable label, used as the audit id of the record
    ///
    /// Built from the record's own fields, so it stays valid after earlier
    /// entries are deleted.
    pub fn label(&self) -> String {
        let label = format!("{} {} {}", self.date, self.category, self.amount);
        if self.description.is_empty() {
            label
        } else {
            format!("{} {}", label, self.description)
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} ({})",
            self.amount, self.category, self.description, self.date
        )
    }
}

/// Normalize a category: trim, upper-case the first character and lower-case
/// the rest ("food" and "FOOD" both become "Food")
pub fn normalize_category(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
