//! Budget CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::ExpenseResult;
use crate::models::month::current_month;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the spending limit for a month
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Limit (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Show the limit for a month
    Get {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,
    },

    /// Compare a month's spending with its limit
    Check {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,
    },

    /// List every month with a budget
    List,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &mut Storage, cmd: BudgetCommands) -> ExpenseResult<()> {
    let mut service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { month, limit } => {
            let previous = service.set_budget_from_input(&month, &limit)?;
            let month = month.trim();
            if let Some(current) = service.get_budget(month) {
                match previous {
                    Some(old) => println!("Budget for {} changed from {} to {}", month, old, current),
                    None => println!("Budget set for {}: {}", month, current),
                }
            }
        }

        BudgetCommands::Get { month } => {
            let month = month.unwrap_or_else(current_month);
            match service.get_budget(&month) {
                Some(limit) => println!("Budget for {}: {}", month.trim(), limit),
                None => println!("No budget set for {}", month.trim()),
            }
        }

        BudgetCommands::Check { month } => {
            let month = month.unwrap_or_else(current_month);
            let status = service.check_status(&month)?;
            print!("{}", display::format_budget_status(&status));
        }

        BudgetCommands::List => {
            print!("{}", display::format_budget_table(&service.list_statuses()));
        }
    }

    Ok(())
}
