//! Expense repository for JSON storage
//!
//! Holds the ledger in memory and persists it to expenses.json as a JSON
//! array, in insertion order. The file is only rewritten on an explicit save.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, MonthMatching};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the expense ledger
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk, replacing the in-memory contents
    ///
    /// A missing file loads as an empty ledger.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.expenses = read_json(&self.path)?;
        Ok(())
    }

    /// Save the whole ledger to disk
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by 1-based position
    pub fn get(&self, position: usize) -> Option<&Expense> {
        position
            .checked_sub(1)
            .and_then(|index| self.expenses.get(index))
    }

    /// Append an expense, returning its 1-based position
    pub fn push(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len()
    }

    /// Remove the expense at a 1-based position
    pub fn remove(&mut self, position: usize) -> ExpenseResult<Expense> {
        if position == 0 || position > self.expenses.len() {
            return Err(ExpenseError::out_of_range(
                position as i64,
                self.expenses.len(),
            ));
        }
        Ok(self.expenses.remove(position - 1))
    }

    /// Sum of amounts for expenses whose date matches `month`
    pub fn month_total(&self, month: &str, matching: MonthMatching) -> Money {
        self.expenses
            .iter()
            .filter(|e| matching.matches(&e.date, month))
            .map(|e| e.amount)
            .sum()
    }

    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Drop all in-memory expenses (used when the store could not be read)
    pub fn clear(&mut self) {
        self.expenses.clear();
    }
}
