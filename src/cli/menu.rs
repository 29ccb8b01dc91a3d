//! Interactive numbered menu
//!
//! Reads choices line by line until the user picks "Save & Exit" or input
//! ends. Every failed operation is reported and the menu is shown again;
//! nothing short of an I/O failure on the terminal ends the session early.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display;
use crate::error::ExpenseResult;
use crate::export::{export_to_file, ExportOutcome};
use crate::models::{Money, SUGGESTED_CATEGORIES};
use crate::reports::MonthlySummary;
use crate::services::{BudgetService, CreateExpenseInput, LedgerService};
use crate::storage::Storage;

const MENU: &str = "
=== Expense Tracker ===
1. Add Expense
2. View All Expenses
3. View by Category
4. Monthly Summary
5. Delete Expense
6. Save & Exit
7. Set Monthly Budget
8. Check Budget Status
9. Export Expenses to CSV";

/// What the loop does after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// An interactive session over any line-based input and output
pub struct Menu<'a, R, W> {
    storage: &'a mut Storage,
    currency_symbol: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a mut Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            storage,
            currency_symbol: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Run until "Save & Exit" succeeds or input ends
    ///
    /// A failed save from the menu is reported and the menu is shown again.
    /// At end of input the save is a last attempt and its error is returned.
    pub fn run(mut self) -> ExpenseResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.ask("Choose an option (1-9): ")? else {
                break;
            };

            let result = match choice.as_str() {
                "1" => self.add_expense(),
                "2" => self.view_all(),
                "3" => self.view_by_category(),
                "4" => self.monthly_summary(),
                "5" => self.delete_expense(),
                "6" => match self.storage.save_expenses() {
                    Ok(()) => return self.say_goodbye(),
                    Err(err) => Err(err),
                },
                "7" => self.set_budget(),
                "8" => self.check_budget(),
                "9" => self.export_csv(),
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    Ok(Step::Continue)
                }
            };

            match result {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(err) => writeln!(self.output, "Error: {}", err)?,
            }
        }

        if let Err(err) = self.storage.save_expenses() {
            writeln!(self.output, "Error: {}", err)?;
            return Err(err);
        }
        self.say_goodbye()
    }

    fn say_goodbye(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Expenses saved!")?;
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Prompt for one line; `None` when input has ended
    fn ask(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_expense(&mut self) -> ExpenseResult<Step> {
        let prompt = format!("Enter amount: {}", self.currency_symbol);
        let Some(amount) = self.ask(&prompt)? else {
            return Ok(Step::Quit);
        };
        // Reject a bad amount before asking for the rest
        let amount = Money::parse_positive(&amount)?;

        let prompt = format!("Enter category ({}): ", SUGGESTED_CATEGORIES.join("/"));
        let Some(category) = self.ask(&prompt)? else {
            return Ok(Step::Quit);
        };
        let Some(description) = self.ask("Enter description: ")? else {
            return Ok(Step::Quit);
        };
        let Some(date) = self.ask("Enter date (YYYY-MM-DD): ")? else {
            return Ok(Step::Quit);
        };

        let input = CreateExpenseInput {
            amount,
            category,
            description,
            date,
        };
        let added = LedgerService::new(self.storage).add(input)?;
        write!(self.output, "{}", display::format_added(&added))?;
        Ok(Step::Continue)
    }

    fn view_all(&mut self) -> ExpenseResult<Step> {
        let entries = LedgerService::new(self.storage).list();
        writeln!(self.output, "\n=== All Expenses ===")?;
        write!(self.output, "{}", display::format_ledger(&entries))?;
        Ok(Step::Continue)
    }

    fn view_by_category(&mut self) -> ExpenseResult<Step> {
        let Some(category) = self.ask("Enter category: ")? else {
            return Ok(Step::Quit);
        };
        let entries = LedgerService::new(self.storage).filter_by_category(&category);
        write!(
            self.output,
            "{}",
            display::format_category_listing(&category, &entries)
        )?;
        Ok(Step::Continue)
    }

    fn monthly_summary(&mut self) -> ExpenseResult<Step> {
        let Some(month) = self.ask("Enter month (YYYY-MM): ")? else {
            return Ok(Step::Quit);
        };
        let summary = MonthlySummary::generate(self.storage, &month)?;
        write!(self.output, "{}", summary.format_terminal())?;
        Ok(Step::Continue)
    }

    fn delete_expense(&mut self) -> ExpenseResult<Step> {
        let entries = LedgerService::new(self.storage).list();
        write!(self.output, "{}", display::format_ledger(&entries))?;
        if entries.is_empty() {
            return Ok(Step::Continue);
        }

        let Some(selection) = self.ask("Enter expense number to delete: ")? else {
            return Ok(Step::Quit);
        };
        let removed = LedgerService::new(self.storage).delete_selection(&selection)?;
        writeln!(self.output, "Deleted: {}", removed)?;
        Ok(Step::Continue)
    }

    fn set_budget(&mut self) -> ExpenseResult<Step> {
        let Some(month) = self.ask("Enter month (YYYY-MM): ")? else {
            return Ok(Step::Quit);
        };
        let prompt = format!("Enter budget limit: {}", self.currency_symbol);
        let Some(limit) = self.ask(&prompt)? else {
            return Ok(Step::Quit);
        };

        let mut service = BudgetService::new(self.storage);
        service.set_budget_from_input(&month, &limit)?;
        if let Some(limit) = service.get_budget(&month) {
            writeln!(self.output, "Budget set for {}: {}", month.trim(), limit)?;
        }
        Ok(Step::Continue)
    }

    fn check_budget(&mut self) -> ExpenseResult<Step> {
        let Some(month) = self.ask("Enter month (YYYY-MM): ")? else {
            return Ok(Step::Quit);
        };
        let status = BudgetService::new(self.storage).check_status(&month)?;
        write!(self.output, "\n{}", display::format_budget_status(&status))?;
        Ok(Step::Continue)
    }

    fn export_csv(&mut self) -> ExpenseResult<Step> {
        let path = self.storage.paths().export_file();
        match export_to_file(self.storage.expenses.all(), &path)? {
            ExportOutcome::Empty => writeln!(self.output, "No expenses to export!")?,
            ExportOutcome::Written { path, records } => writeln!(
                self.output,
                "Exported {} expenses to {}",
                records,
                path.display()
            )?,
        }
        Ok(Step::Continue)
    }
}
