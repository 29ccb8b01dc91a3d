//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BudgetStatus;

use super::report::format_percentage;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

impl From<&BudgetStatus> for BudgetRow {
    fn from(status: &BudgetStatus) -> Self {
        Self {
            month: status.month.clone(),
            limit: status.limit.to_string(),
            spent: status.spent.to_string(),
            remaining: status.remaining.to_string(),
            used: format_percentage(status.percent_used()),
        }
    }
}

/// Detail view for one month's budget check
pub fn format_budget_status(status: &BudgetStatus) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget for {}: {}\n", status.month, status.limit));
    output.push_str(&format!("Total spent:    {}\n", status.spent));
    if status.is_over_budget() {
        output.push_str(&format!("Budget exceeded by {}\n", status.overage()));
    } else {
        output.push_str(&format!("Remaining budget: {}\n", status.remaining));
    }
    output
}

/// Table of every month with a budget
pub fn format_budget_table(statuses: &[BudgetStatus]) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<BudgetRow> = statuses.iter().map(BudgetRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}
