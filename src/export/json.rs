//! JSON Export functionality
//!
//! Exports the ledger and budget table as one versioned document.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of the stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The ledger, in order
    pub expenses: Vec<Expense>,

    /// Month -> limit
    pub budgets: BTreeMap<String, Money>,
}

impl FullExport {
    /// Snapshot the current session
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: storage.expenses.all().to_vec(),
            budgets: storage
                .budget
                .iter()
                .map(|(month, limit)| (month.to_string(), limit))
                .collect(),
        }
    }
}

/// Export the stores to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> ExpenseResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
