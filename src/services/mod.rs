//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived totals and the ledger/budget interaction.

pub mod budget;
pub mod ledger;

pub use budget::BudgetService;
pub use ledger::{
    parse_position, AddedExpense, CategoryTotal, CreateExpenseInput, LedgerEntry, LedgerService,
};
