//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_full_json, export_full_yaml, export_to_file, ExportOutcome};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows of the ledger
    #[default]
    Csv,
    /// JSON snapshot of ledger and budgets
    Json,
    /// YAML snapshot of ledger and budgets
    Yaml,
}

/// Arguments of the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file; CSV defaults to expenses.csv in the data directory,
    /// JSON and YAML default to standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    match args.format {
        ExportFormat::Csv => {
            let path = args
                .output
                .unwrap_or_else(|| storage.paths().export_file());
            match export_to_file(storage.expenses.all(), &path)? {
                ExportOutcome::Empty => println!("No expenses to export!"),
                ExportOutcome::Written { path, records } => {
                    println!("Exported {} expenses to {}", records, path.display())
                }
            }
        }
        ExportFormat::Json => {
            let mut writer = open_output(args.output.as_ref())?;
            export_full_json(storage, &mut writer, args.pretty)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        ExportFormat::Yaml => {
            let mut writer = open_output(args.output.as_ref())?;
            export_full_yaml(storage, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> ExpenseResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| ExpenseError::Export(format!("{}: {}", path.display(), e)))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
