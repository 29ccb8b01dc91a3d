//! CSV export of the ledger
//!
//! One header row followed by one row per expense, in ledger order.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column names of the exported file
pub const CSV_HEADER: [&str; 4] = ["Amount", "Category", "Description", "Date"];

/// Result of an export to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The ledger was empty and no file was written
    Empty,
    /// The file was written with this many expense rows
    Written { path: PathBuf, records: usize },
}

/// Build the export rows: the header, then one row per expense
///
/// Amounts are plain decimals with two fractional digits. An empty ledger
/// yields no rows at all.
pub fn export_rows(expenses: &[Expense]) -> Vec<[String; 4]> {
    if expenses.is_empty() {
        return Vec::new();
    }

    let header = CSV_HEADER.map(str::to_string);
    std::iter::once(header)
        .chain(expenses.iter().map(|expense| {
            [
                expense.amount.to_decimal_string(),
                expense.category.clone(),
                expense.description.clone(),
                expense.date.clone(),
            ]
        }))
        .collect()
}

/// Write the ledger as CSV to any writer
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in export_rows(expenses) {
        csv_writer.write_record(&row)?;
    }
    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(expenses.len())
}

/// Write the ledger to a CSV file, leaving the file untouched when the ledger is empty
pub fn export_to_file(expenses: &[Expense], path: &Path) -> ExpenseResult<ExportOutcome> {
    if expenses.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ExpenseError::Export(format!("{}: {}", parent.display(), e)))?;
    }
    let file = File::create(path)
        .map_err(|e| ExpenseError::Export(format!("{}: {}", path.display(), e)))?;
    let records = export_expenses_csv(expenses, file)?;

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn expense(cents: i64, category: &str, description: &str, date: &str) -> Expense {
        Expense::new(Money::from_cents(cents), category, description, date).unwrap()
    }

    #[test]
    fn test_rows_for_single_expense() {
        let rows = export_rows(&[expense(5000, "Food", "lunch", "2024-03-15")]);
        assert_eq!(
            rows,
            vec![
                ["Amount", "Category", "Description", "Date"].map(String::from),
                ["50.00", "Food", "lunch", "2024-03-15"].map(String::from),
            ]
        );
    }

    #[test]
    fn test_empty_ledger_has_no_rows() {
        assert!(export_rows(&[]).is_empty());
    }

    #[test]
    fn test_csv_quoting() {
        let mut buffer = Vec::new();
        let count = export_expenses_csv(
            &[expense(1250, "Food", "pizza, large", "2024-03-15")],
            &mut buffer,
        )
        .unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Amount,Category,Description,Date\n12.50,Food,\"pizza, large\",2024-03-15\n"
        );
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("expenses.csv");

        let outcome = export_to_file(&[], &path).unwrap();
        assert_eq!(outcome, ExportOutcome::Empty);
        assert!(!path.exists());

        let expenses = vec![
            expense(5000, "Food", "lunch", "2024-03-15"),
            expense(250, "Transport", "bus", "2024-03-16"),
        ];
        let outcome = export_to_file(&expenses, &path).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: path.clone(),
                records: 2
            }
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Amount,Category,Description,Date"));
        assert_eq!(lines.next(), Some("50.00,Food,lunch,2024-03-15"));
        assert_eq!(lines.next(), Some("2.50,Transport,bus,2024-03-16"));
        assert_eq!(lines.next(), None);
    }
}
