//! Ledger service
//!
//! Business logic for the expense ledger: adding and deleting expenses,
//! positional listing, category filtering and month totals. Adding an expense
//! also checks the month's budget and reports when it has been exceeded.

use std::collections::HashMap;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, BudgetWarning, Expense, Money};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a mut Storage,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl CreateExpenseInput {
    /// Build an input from raw text, validating the amount
    ///
    /// Fails with `InvalidAmount` if the amount is non-numeric or not positive.
    pub fn parse(
        amount: &str,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> ExpenseResult<Self> {
        Ok(Self {
            amount: Money::parse_positive(amount)?,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        })
    }
}

/// An expense together with its 1-based ledger position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub position: usize,
    pub expense: Expense,
}

/// Outcome of a successful add
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub entry: LedgerEntry,
    /// Set when the add pushed the month over its budget
    pub budget_warning: Option<BudgetWarning>,
}

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add an expense to the end of the ledger
    pub fn add(&mut self, input: CreateExpenseInput) -> ExpenseResult<AddedExpense> {
        let expense = Expense::new(input.amount, &input.category, input.description, input.date)?;
        let position = self.storage.expenses.count() + 1;

        // Audit first: a failed log write must leave the ledger unchanged
        self.storage.log_create(
            EntityType::Expense,
            expense.label(),
            Some(format!("#{}", position)),
            &expense,
        )?;
        self.storage.expenses.push(expense.clone());

        let budget_warning = self.budget_warning_for(expense.month());

        Ok(AddedExpense {
            entry: LedgerEntry { position, expense },
            budget_warning,
        })
    }

    fn budget_warning_for(&self, month: &str) -> Option<BudgetWarning> {
        let limit = self.storage.budget.get(month)?;
        let total = self
            .storage
            .expenses
            .month_total(month, self.storage.month_matching());

        (total > limit).then(|| BudgetWarning {
            month: month.to_string(),
            limit,
            total,
        })
    }

    /// All expenses in insertion order, numbered from 1
    pub fn list(&self) -> Vec<LedgerEntry> {
        self.storage
            .expenses
            .all()
            .iter()
            .enumerate()
            .map(|(index, expense)| LedgerEntry {
                position: index + 1,
                expense: expense.clone(),
            })
            .collect()
    }

    /// Expenses whose category equals `category` after normalization
    ///
    /// Positions are ledger positions. An unknown category yields an empty list.
    pub fn filter_by_category(&self, category: &str) -> Vec<LedgerEntry> {
        let wanted = normalize_category(category);
        self.list()
            .into_iter()
            .filter(|entry| entry.expense.category == wanted)
            .collect()
    }

    /// Delete the expense at a 1-based position from the last listing
    pub fn delete(&mut self, position: usize) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(position)
            .cloned()
            .ok_or_else(|| ExpenseError::out_of_range(position as i64, self.storage.expenses.count()))?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.label(),
            Some(format!("#{}", position)),
            &expense,
        )?;

        self.storage.expenses.remove(position)
    }

    /// Delete by a position typed by the user
    ///
    /// Fails with `InvalidIndex` when the text is not an integer and with
    /// `OutOfRange` when it is outside 1..=len.
    pub fn delete_selection(&mut self, selection: &str) -> ExpenseResult<Expense> {
        let position = parse_position(selection, self.storage.expenses.count())?;
        self.delete(position)
    }

    /// Total spent in a month
    pub fn month_total(&self, month: &str) -> ExpenseResult<Money> {
        let matching = self.storage.month_matching();
        matching.validate_month(month)?;
        Ok(self.storage.expenses.month_total(month, matching))
    }

    /// Per-category totals, optionally restricted to one month, largest first
    pub fn category_totals(&self, month: Option<&str>) -> ExpenseResult<Vec<CategoryTotal>> {
        let matching = self.storage.month_matching();
        if let Some(month) = month {
            matching.validate_month(month)?;
        }

        let mut totals: HashMap<&str, (Money, usize)> = HashMap::new();
        for expense in self.storage.expenses.all() {
            if month.map_or(true, |m| matching.matches(&expense.date, m)) {
                let entry = totals.entry(expense.category.as_str()).or_default();
                entry.0 += expense.amount;
                entry.1 += 1;
            }
        }

        let mut totals: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, (total, count))| CategoryTotal {
                category: category.to_string(),
                total,
                count,
            })
            .collect();
        totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Ok(totals)
    }

    pub fn count(&self) -> usize {
        self.storage.expenses.count()
    }
}

/// Parse a user-typed 1-based position against a ledger of `len` entries
pub fn parse_position(selection: &str, len: usize) -> ExpenseResult<usize> {
    let trimmed = selection.trim();
    let position: i64 = trimmed
        .parse()
        .map_err(|_| ExpenseError::InvalidIndex(trimmed.to_string()))?;

    if position < 1 || position as u64 > len as u64 {
        return Err(ExpenseError::out_of_range(position, len));
    }

    Ok(position as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::MonthMatching;
    use crate::services::BudgetService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        create_storage_with(Settings::default())
    }

    fn create_storage_with(settings: Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &settings).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    fn input(amount: &str, category: &str, description: &str, date: &str) -> CreateExpenseInput {
        CreateExpenseInput::parse(amount, category, description, date).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);

        let added = service.add(input("50.0", "food", "lunch", "2024-03-15")).unwrap();
        assert_eq!(added.entry.position, 1);
        assert!(added.budget_warning.is_none());

        let list = service.list();
        assert_eq!(list.len(), 1);
        let expense = &list[0].expense;
        assert_eq!(list[0].position, 1);
        assert_eq!(expense.amount, Money::from_cents(5000));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.date, "2024-03-15");
    }

    #[test]
    fn test_add_appends_last() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);

        service.add(input("1", "Food", "a", "2024-01-01")).unwrap();
        service.add(input("2", "Food", "b", "2024-01-02")).unwrap();
        let added = service.add(input("3", "Other", "c", "2023-12-31")).unwrap();

        let list = service.list();
        assert_eq!(added.entry.position, 3);
        assert_eq!(list.last().unwrap(), &added.entry);
    }

    #[test]
    fn test_invalid_amounts_leave_ledger_unchanged() {
        for raw in ["0", "-5", "abc", "", "0.00"] {
            let err = CreateExpenseInput::parse(raw, "Food", "x", "2024-01-01").unwrap_err();
            assert!(err.is_invalid_amount(), "{raw} should be rejected");
        }

        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        let bad = CreateExpenseInput {
            amount: Money::zero(),
            category: "Food".into(),
            description: "x".into(),
            date: "2024-01-01".into(),
        };

        assert!(service.add(bad).unwrap_err().is_invalid_amount());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_filter_by_category_normalizes_query() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "food", "a", "2024-01-01")).unwrap();
        service.add(input("20", "Transport", "b", "2024-01-02")).unwrap();
        service.add(input("30", "FOOD", "c", "2024-01-03")).unwrap();

        let food = service.filter_by_category("fOOd");
        let positions: Vec<usize> = food.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 3]);

        assert!(service.filter_by_category("Entertainment").is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "Food", "a", "2024-01-01")).unwrap();
        service.add(input("20", "Food", "b", "2024-01-02")).unwrap();
        service.add(input("30", "Food", "c", "2024-01-03")).unwrap();

        let removed = service.delete(2).unwrap();
        assert_eq!(removed.description, "b");

        let descriptions: Vec<String> = service
            .list()
            .into_iter()
            .map(|e| e.expense.description)
            .collect();
        assert_eq!(descriptions, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range_leaves_ledger() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "Food", "a", "2024-01-01")).unwrap();

        assert!(matches!(
            service.delete(0),
            Err(ExpenseError::OutOfRange { position: 0, len: 1 })
        ));
        assert!(matches!(
            service.delete(2),
            Err(ExpenseError::OutOfRange { position: 2, len: 1 })
        ));
        assert!(matches!(
            service.delete_selection("-1"),
            Err(ExpenseError::OutOfRange { position: -1, len: 1 })
        ));
        assert!(matches!(
            service.delete_selection("one"),
            Err(ExpenseError::InvalidIndex(_))
        ));
        assert!(matches!(
            service.delete_selection("1.5"),
            Err(ExpenseError::InvalidIndex(_))
        ));
        assert_eq!(service.count(), 1);

        assert_eq!(service.delete_selection(" 1 ").unwrap().description, "a");
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_month_total_prefix_semantics() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "Food", "", "2024-01-05")).unwrap();
        service.add(input("20", "Food", "", "2024-10-05")).unwrap();
        service.add(input("40", "Food", "", "2024-11-05")).unwrap();
        service.add(input("80", "Food", "", "2023-01-05")).unwrap();

        assert_eq!(service.month_total("2024-01").unwrap(), Money::from_cents(1000));
        assert_eq!(service.month_total("2024-1").unwrap(), Money::from_cents(6000));
        assert_eq!(service.month_total("2024").unwrap(), Money::from_cents(7000));
        assert!(service.month_total("2025-01").unwrap().is_zero());
    }

    #[test]
    fn test_month_total_calendar_mode() {
        let settings = Settings {
            month_matching: MonthMatching::Calendar,
            ..Settings::default()
        };
        let (_temp_dir, mut storage) = create_storage_with(settings);
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "Food", "", "2024-01-05")).unwrap();
        service.add(input("20", "Food", "", "2024-10-05")).unwrap();

        assert_eq!(service.month_total("2024-01").unwrap(), Money::from_cents(1000));
        assert!(matches!(
            service.month_total("2024-1"),
            Err(ExpenseError::InvalidMonth(_))
        ));
    }

    #[test]
    fn test_huge_amounts_rejected_and_large_totals_hold() {
        let (_temp_dir, mut storage) = create_test_storage();
        let huge = CreateExpenseInput::parse("90000000000000000", "Food", "", "2024-03-01");
        assert!(huge.unwrap_err().is_invalid_amount());

        let mut service = LedgerService::new(&mut storage);
        service.add(input("1000000000", "Food", "", "2024-03-01")).unwrap();
        service.add(input("1000000000", "Food", "", "2024-03-02")).unwrap();

        let total = service.month_total("2024-03").unwrap();
        assert!(total.is_positive());
        assert_eq!(total, Money::MAX + Money::MAX);
    }

    #[test]
    fn test_precise_amount_listed_unchanged() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("12.345", "Food", "", "2024-03-01")).unwrap();
        service.add(input("0.001", "Food", "", "2024-03-02")).unwrap();

        let listed = service.list();
        assert_eq!(listed[0].expense.amount, Money::parse("12.345").unwrap());
        assert_eq!(listed[1].expense.amount, Money::parse("0.001").unwrap());
        assert_eq!(service.month_total("2024-03").unwrap(), Money::parse("12.346").unwrap());
    }

    #[test]
    fn test_budget_warning_on_second_add() {
        let (_temp_dir, mut storage) = create_test_storage();
        BudgetService::new(&mut storage)
            .set_budget("2024-03", Money::from_cents(10000))
            .unwrap();

        let mut service = LedgerService::new(&mut storage);
        let first = service.add(input("60.0", "Food", "a", "2024-03-10")).unwrap();
        assert!(first.budget_warning.is_none());

        let second = service.add(input("60.0", "Food", "b", "2024-03-20")).unwrap();
        let warning = second.budget_warning.unwrap();
        assert_eq!(warning.month, "2024-03");
        assert_eq!(warning.limit, Money::from_cents(10000));
        assert_eq!(warning.total, Money::from_cents(12000));

        // Other months are unaffected
        let other = service.add(input("500", "Food", "c", "2024-04-01")).unwrap();
        assert!(other.budget_warning.is_none());
    }

    #[test]
    fn test_no_warning_when_exactly_at_limit() {
        let (_temp_dir, mut storage) = create_test_storage();
        BudgetService::new(&mut storage)
            .set_budget("2024-03", Money::from_cents(10000))
            .unwrap();

        let mut service = LedgerService::new(&mut storage);
        let added = service.add(input("100", "Food", "a", "2024-03-10")).unwrap();
        assert!(added.budget_warning.is_none());
    }

    #[test]
    fn test_category_totals() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LedgerService::new(&mut storage);
        service.add(input("10", "Food", "", "2024-03-01")).unwrap();
        service.add(input("15", "food", "", "2024-03-02")).unwrap();
        service.add(input("40", "Transport", "", "2024-03-03")).unwrap();
        service.add(input("99", "Food", "", "2024-04-01")).unwrap();

        let march = service.category_totals(Some("2024-03")).unwrap();
        assert_eq!(
            march,
            vec![
                CategoryTotal {
                    category: "Transport".into(),
                    total: Money::from_cents(4000),
                    count: 1
                },
                CategoryTotal {
                    category: "Food".into(),
                    total: Money::from_cents(2500),
                    count: 2
                },
            ]
        );

        let all = service.category_totals(None).unwrap();
        assert_eq!(all[0].category, "Food");
        assert_eq!(all[0].total, Money::from_cents(12400));
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, mut storage) = create_test_storage();
        {
            let mut service = LedgerService::new(&mut storage);
            service.add(input("10", "Food", "a", "2024-01-01")).unwrap();
            service.delete(1).unwrap();
        }

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
        assert_eq!(entries[0].operation, crate::audit::Operation::Create);
        assert_eq!(entries[1].operation, crate::audit::Operation::Delete);
        assert_eq!(entries[1].entity_id, "2024-01-01 Food $10.00 a");
    }

    #[test]
    fn test_audit_ids_survive_renumbering() {
        let (_temp_dir, mut storage) = create_test_storage();
        {
            let mut service = LedgerService::new(&mut storage);
            service.add(input("10", "Food", "a", "2024-01-01")).unwrap();
            service.add(input("20", "Food", "b", "2024-01-02")).unwrap();
            service.delete(1).unwrap();
            // "b" is now at position 1, the slot "a" was created in
            service.delete(1).unwrap();
        }

        let entries = storage.audit().unwrap().read_all().unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "2024-01-01 Food $10.00 a",
                "2024-01-02 Food $20.00 b",
                "2024-01-01 Food $10.00 a",
                "2024-01-02 Food $20.00 b",
            ]
        );
        assert_eq!(entries[3].entity_name.as_deref(), Some("#1"));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3", 3).unwrap(), 3);
        assert!(matches!(parse_position("4", 3), Err(ExpenseError::OutOfRange { .. })));
        assert!(matches!(parse_position("", 3), Err(ExpenseError::InvalidIndex(_))));
        assert!(matches!(parse_position("1", 0), Err(ExpenseError::OutOfRange { .. })));
    }
}
