//! Budget models
//!
//! A monthly spending limit and the derived comparison of that limit against
//! what the ledger says was spent.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Result of comparing a month's budget to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    /// Month key the budget applies to
    pub month: String,

    /// The configured limit
    pub limit: Money,

    /// Sum of the month's expenses
    pub spent: Money,

    /// `limit - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetStatus {
    /// Build a status from a limit and the month's spending
    pub fn new(month: impl Into<String>, limit: Money, spent: Money) -> Self {
        Self {
            month: month.into(),
            limit,
            spent,
            remaining: limit - spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Amount by which spending exceeds the limit (zero when within budget)
    pub fn overage(&self) -> Money {
        if self.is_over_budget() {
            self.remaining.abs()
        } else {
            Money::zero()
        }
    }

    /// Share of the limit already spent, as a percentage
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        self.spent.as_f64() / self.limit.as_f64() * 100.0
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_over_budget() {
            write!(
                f,
                "{}: spent {} of {} (over by {})",
                self.month,
                self.spent,
                self.limit,
                self.overage()
            )
        } else {
            write!(
                f,
                "{}: spent {} of {} ({} remaining)",
                self.month, self.spent, self.limit, self.remaining
            )
        }
    }
}

/// Raised by an add that pushes a month past its budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    pub month: String,
    pub limit: Money,
    /// Month total including the expense just added
    pub total: Money,
}

impl BudgetWarning {
    pub fn overage(&self) -> Money {
        self.total - self.limit
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monthly budget exceeded for {}: spent {} of {} (over by {})",
            self.month,
            self.total,
            self.limit,
            self.overage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_within_budget() {
        let status = BudgetStatus::new("2024-03", Money::from_cents(10000), Money::from_cents(4000));
        assert_eq!(status.remaining.cents(), 6000);
        assert!(!status.is_over_budget());
        assert!(status.overage().is_zero());
        assert_eq!(status.percent_used(), 40.0);
        assert_eq!(
            status.to_string(),
            "2024-03: spent $40.00 of $100.00 ($60.00 remaining)"
        );
    }

    #[test]
    fn test_status_over_budget() {
        let status = BudgetStatus::new("2024-03", Money::from_cents(10000), Money::from_cents(12000));
        assert_eq!(status.remaining.cents(), -2000);
        assert!(status.is_over_budget());
        assert_eq!(status.overage().cents(), 2000);
        assert!(status.to_string().contains("over by $20.00"));
    }

    #[test]
    fn test_exactly_on_budget_is_not_over() {
        let status = BudgetStatus::new("2024-03", Money::from_cents(10000), Money::from_cents(10000));
        assert!(!status.is_over_budget());
        assert!(status.remaining.is_zero());
    }

    #[test]
    fn test_warning_display() {
        let warning = BudgetWarning {
            month: "2024-03".into(),
            limit: Money::from_cents(10000),
            total: Money::from_cents(12000),
        };
        assert_eq!(warning.overage().cents(), 2000);
        assert_eq!(
            warning.to_string(),
            "Monthly budget exceeded for 2024-03: spent $120.00 of $100.00 (over by $20.00)"
        );
    }
}
