//! Budget repository for JSON storage
//!
//! Manages the month -> limit table persisted in budget.json as a JSON object
//! keyed by month. Unlike the ledger, every write is saved immediately by the
//! service layer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Repository for monthly budget limits
pub struct BudgetRepository {
    path: PathBuf,
    limits: BTreeMap<String, Money>,
}

impl BudgetRepository {
    /// Create a new, empty budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            limits: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load limits from disk; a missing file loads as an empty table
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.limits = read_json(&self.path)?;
        Ok(())
    }

    /// Save limits to disk
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.limits)
    }

    /// Get the limit for a month
    pub fn get(&self, month: &str) -> Option<Money> {
        self.limits.get(month).copied()
    }

    /// Insert or overwrite a month's limit, returning the previous one
    pub fn upsert(&mut self, month: impl Into<String>, limit: Money) -> Option<Money> {
        self.limits.insert(month.into(), limit)
    }

    /// Remove a month's limit
    pub fn remove(&mut self, month: &str) -> Option<Money> {
        self.limits.remove(month)
    }

    /// All (month, limit) pairs ordered by month key
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.limits.iter().map(|(month, limit)| (month.as_str(), *limit))
    }

    pub fn count(&self) -> usize {
        self.limits.len()
    }

    /// Drop all in-memory limits (used when the store could not be read)
    pub fn clear(&mut self) {
        self.limits.clear();
    }
}
