//! Monthly summary report
//!
//! Total spending for a month, broken down by category, with the month's
//! budget status when one is set.

use crate::error::ExpenseResult;
use crate::models::{BudgetStatus, Money};
use crate::services::{BudgetService, CategoryTotal, LedgerService};
use crate::storage::Storage;

use crate::display::report::{format_bar, format_percentage};

/// Width of the bar column in the terminal rendering
const BAR_WIDTH: usize = 20;

/// Spending summary for one month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: String,
    /// Sum of every expense in the month
    pub total: Money,
    /// Per-category totals, largest first
    pub by_category: Vec<CategoryTotal>,
    /// Budget comparison, if a budget is set for the month
    pub budget: Option<BudgetStatus>,
}

impl MonthlySummary {
    /// Generate the summary for a month
    pub fn generate(storage: &mut Storage, month: &str) -> ExpenseResult<Self> {
        let month = month.trim();
        let (total, by_category) = {
            let ledger = LedgerService::new(storage);
            (ledger.month_total(month)?, ledger.category_totals(Some(month))?)
        };

        let budget = match BudgetService::new(storage).check_status(month) {
            Ok(status) => Some(status),
            Err(err) if err.is_budget_not_set() => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            month: month.to_string(),
            total,
            by_category,
            budget,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }

    /// Share of the month's total spent in a category
    pub fn percentage(&self, category: &CategoryTotal) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            category.total.as_f64() / self.total.as_f64() * 100.0
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("No expenses for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("Total spent in {}: {}\n", self.month, self.total));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {:>6}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        let largest = self
            .by_category
            .first()
            .map(|c| c.total.as_f64())
            .unwrap_or(0.0);

        for category in &self.by_category {
            output.push_str(&format!(
                "{:<16} {:>12} {:>6} {:>6}  {}\n",
                category.category,
                category.total,
                category.count,
                format_percentage(self.percentage(category)),
                format_bar(category.total.as_f64(), largest, BAR_WIDTH)
            ));
        }

        if let Some(status) = &self.budget {
            output.push('\n');
            output.push_str(&format!("Budget: {}\n", status));
        }

        output
    }
}
