//! Budget service
//!
//! Sets monthly spending limits and compares them against the ledger. Every
//! change to the budget table is written to disk before the call returns.

use serde::Serialize;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetStatus, Money};
use crate::storage::Storage;

/// Service for monthly budgets
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

/// Audit snapshot of a budget entry
#[derive(Serialize)]
struct BudgetSnapshot<'m> {
    month: &'m str,
    limit: Money,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set (or overwrite) the limit for a month and save the table
    ///
    /// Returns the previous limit, if any. The change is audited first; a
    /// failed audit write leaves the table untouched. If the save fails the
    /// in-memory table is restored and `StoreUnavailable` is returned.
    pub fn set_budget(&mut self, month: &str, limit: Money) -> ExpenseResult<Option<Money>> {
        let limit = limit.ensure_valid()?;
        let month = month.trim();
        self.storage.month_matching().validate_month(month)?;

        let after = BudgetSnapshot { month, limit };
        match self.storage.budget.get(month) {
            Some(old) => self.storage.log_update(
                EntityType::Budget,
                month,
                None,
                &BudgetSnapshot { month, limit: old },
                &after,
            )?,
            None => self.storage.log_create(EntityType::Budget, month, None, &after)?,
        }

        let previous = self.storage.budget.upsert(month, limit);
        if let Err(err) = self.storage.budget.save() {
            self.restore(month, previous);
            return Err(err);
        }

        Ok(previous)
    }

    /// Set a budget from a user-typed limit
    ///
    /// Fails with `InvalidAmount` if the text is non-numeric or not positive.
    pub fn set_budget_from_input(&mut self, month: &str, limit: &str) -> ExpenseResult<Option<Money>> {
        let limit = Money::parse_positive(limit)?;
        self.set_budget(month, limit)
    }

    fn restore(&mut self, month: &str, previous: Option<Money>) {
        match previous {
            Some(old) => {
                self.storage.budget.upsert(month, old);
            }
            None => {
                self.storage.budget.remove(month);
            }
        }
    }

    /// The limit for a month, or `None` when unset
    pub fn get_budget(&self, month: &str) -> Option<Money> {
        self.storage.budget.get(month.trim())
    }

    /// Compare a month's budget with what the ledger says was spent
    pub fn check_status(&self, month: &str) -> ExpenseResult<BudgetStatus> {
        let month = month.trim();
        let limit = self
            .get_budget(month)
            .ok_or_else(|| ExpenseError::BudgetNotSet(month.to_string()))?;

        let spent = self
            .storage
            .expenses
            .month_total(month, self.storage.month_matching());

        Ok(BudgetStatus::new(month, limit, spent))
    }

    /// Status of every month with a budget, ordered by month key
    pub fn list_statuses(&self) -> Vec<BudgetStatus> {
        let matching = self.storage.month_matching();
        self.storage
            .budget
            .iter()
            .map(|(month, limit)| {
                let spent = self.storage.expenses.month_total(month, matching);
                BudgetStatus::new(month, limit, spent)
            })
            .collect()
    }
}
