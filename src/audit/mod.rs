//! Audit logging for the expense tracker
//!
//! Records every ledger and budget mutation with before/after values in an
//! append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and optional before/after values.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.
//! - `generate_diff`: human-readable summary of what an update changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Expense, expense.label(), None, &expense);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
