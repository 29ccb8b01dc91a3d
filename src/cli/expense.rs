//! Expense CLI commands
//!
//! One-shot commands over the ledger. A command that changes the ledger
//! saves it once it has succeeded.

use clap::Subcommand;

use crate::display;
use crate::error::ExpenseResult;
use crate::models::month::{current_month, today};
use crate::reports::MonthlySummary;
use crate::services::{CreateExpenseInput, LedgerService};
use crate::storage::Storage;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Amount (e.g., "12.50" or "$12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Transport, Entertainment, Other, or anything else)
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all expenses with their positions
    #[command(alias = "ls")]
    List,

    /// List the expenses in one category
    Category {
        /// Category name (case-insensitive)
        name: String,
    },

    /// Spending summary for a month
    Summary {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,
        /// Show category totals across the whole ledger instead
        #[arg(long, conflicts_with = "month")]
        all: bool,
    },

    /// Delete an expense by its position in `list`
    #[command(alias = "rm")]
    Delete {
        /// 1-based position
        #[arg(allow_hyphen_values = true)]
        position: String,
    },
}

/// Handle a ledger command
pub fn handle_expense_command(storage: &mut Storage, cmd: ExpenseCommands) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let input = CreateExpenseInput::parse(&amount, category, description, date)?;
            let added = LedgerService::new(storage).add(input)?;
            storage.save_expenses()?;
            print!("{}", display::format_added(&added));
        }

        ExpenseCommands::List => {
            let entries = LedgerService::new(storage).list();
            print!("{}", display::format_ledger(&entries));
        }

        ExpenseCommands::Category { name } => {
            let entries = LedgerService::new(storage).filter_by_category(&name);
            print!("{}", display::format_category_listing(&name, &entries));
        }

        ExpenseCommands::Summary { month, all } => {
            if all {
                let totals = LedgerService::new(storage).category_totals(None)?;
                print!("{}", display::format_category_totals(&totals));
            } else {
                let month = month.unwrap_or_else(current_month);
                let summary = MonthlySummary::generate(storage, &month)?;
                print!("{}", summary.format_terminal());
            }
        }

        ExpenseCommands::Delete { position } => {
            let removed = LedgerService::new(storage).delete_selection(&position)?;
            storage.save_expenses()?;
            println!("Deleted: {}", removed);
        }
    }

    Ok(())
}
