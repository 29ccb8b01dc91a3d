//! Expense display formatting
//!
//! Numbered ledger listings and the pipe-separated category view.

use crate::services::{AddedExpense, CategoryTotal, LedgerEntry};

use super::report::{separator, truncate};

/// Format one numbered ledger row: `1. $50.00 - Food - lunch (2024-03-15)`
pub fn format_ledger_row(entry: &LedgerEntry) -> String {
    format!("{}. {}", entry.position, entry.expense)
}

/// Format the full ledger listing
pub fn format_ledger(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_ledger_row(entry));
        output.push('\n');
    }
    output
}

/// Format one row of a category listing: `2024-03-15 | Food | $50.00 | lunch`
pub fn format_category_row(entry: &LedgerEntry) -> String {
    let expense = &entry.expense;
    format!(
        "{} | {} | {} | {}",
        expense.date, expense.category, expense.amount, expense.description
    )
}

/// Format the expenses found for a category
pub fn format_category_listing(category: &str, entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return format!("No expenses found in category '{}'.\n", category.trim());
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_category_row(entry));
        output.push('\n');
    }
    output
}

/// Confirmation shown after an add, followed by any budget warning
pub fn format_added(added: &AddedExpense) -> String {
    let mut output = format!(
        "Added expense #{}: {}\n",
        added.entry.position, added.entry.expense
    );
    if let Some(warning) = &added.budget_warning {
        output.push_str(&format!("Warning: {}\n", warning));
    }
    output
}

/// Category totals across the whole ledger
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<20} {:>12} {:>6}\n", "Category", "Total", "Count"));
    output.push_str(&separator(40));
    output.push('\n');
    for total in totals {
        output.push_str(&format!(
            "{:<20} {:>12} {:>6}\n",
            truncate(&total.category, 20),
            total.total,
            total.count
        ));
    }
    output
}
