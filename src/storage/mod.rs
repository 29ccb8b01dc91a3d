//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes. [`Storage`] is the session
//! context: it owns the ledger and the budget table for one run, and every
//! service borrows it.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthMatching;

/// Main storage coordinator that owns both stores
pub struct Storage {
    paths: ExpensePaths,
    month_matching: MonthMatching,
    audit: Option<AuditLogger>,
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance with empty in-memory stores
    pub fn new(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            month_matching: settings.month_matching,
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// How expense dates are matched to month keys in this session
    pub fn month_matching(&self) -> MonthMatching {
        self.month_matching
    }

    /// Load both stores from disk
    ///
    /// A store that exists but cannot be read is moved aside and the session
    /// continues with that store empty. Returns one message per such store.
    pub fn load_all(&mut self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Err(err) = self.expenses.load() {
            self.expenses.clear();
            issues.push(recover_unreadable(self.expenses.path(), err));
        }

        if let Err(err) = self.budget.load() {
            self.budget.clear();
            issues.push(recover_unreadable(self.budget.path(), err));
        }

        issues
    }

    /// Persist the ledger (the budget table is saved on every change)
    pub fn save_expenses(&self) -> ExpenseResult<()> {
        self.expenses.save()
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.log(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log, with a diff of the two states
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> ExpenseResult<()> {
        self.log(|| {
            let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
                (Ok(b), Ok(a)) => crate::audit::generate_diff(&b, &a),
                _ => None,
            };
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff)
        })
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.log(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

fn recover_unreadable(path: &std::path::Path, err: ExpenseError) -> String {
    match file_io::quarantine(path) {
        Ok(moved) => format!(
            "{}; starting with an empty store (original kept at {})",
            err,
            moved.display()
        ),
        Err(move_err) => format!("{}; starting with an empty store ({})", err, move_err),
    }
}
