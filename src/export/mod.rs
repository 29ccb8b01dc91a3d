//! Export module for the expense tracker
//!
//! - CSV: the ledger as spreadsheet rows
//! - JSON: machine-readable snapshot of ledger and budgets
//! - YAML: human-readable snapshot of ledger and budgets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_rows, export_to_file, ExportOutcome, CSV_HEADER};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
