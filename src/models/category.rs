//! Predefined categories and category pickers
//!
//! Categories are free text. The predefined lists only seed the pickers;
//! any category already in use is offered as well.

use super::budget::Budget;
use super::transaction::{Transaction, TransactionType};

/// Default expense categories
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Food",
    "Housing",
    "Transportation",
    "Entertainment",
    "Healthcare",
    "Education",
    "Utilities",
    "Shopping",
    "Personal",
    "Other",
];

/// Default income categories
pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investments",
    "Gifts",
    "Refunds",
    "Other",
];

/// Predefined categories for a transaction type
pub fn predefined(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

fn push_unique(list: &mut Vec<String>, category: &str) {
    if !category.is_empty() && !list.iter().any(|c| c == category) {
        list.push(category.to_string());
    }
}

/// Categories offered when entering a transaction of `kind`
///
/// The predefined list comes first, followed by categories used by any
/// existing transaction in first-appearance order.
pub fn transaction_choices(kind: TransactionType, transactions: &[Transaction]) -> Vec<String> {
    let mut choices: Vec<String> = predefined(kind).iter().map(|c| c.to_string()).collect();
    for txn in transactions {
        push_unique(&mut choices, &txn.category);
    }
    choices
}

/// Categories offered when creating a budget
///
/// Predefined expense categories plus those of existing expense
/// transactions, minus categories that already have a budget.
pub fn budget_choices(transactions: &[Transaction], budgets: &[Budget]) -> Vec<String> {
    let mut choices: Vec<String> = EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        push_unique(&mut choices, &txn.category);
    }
    choices.retain(|c| !budgets.iter().any(|b| &b.category == c));
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(category: &str, kind: TransactionType) -> Transaction {
        Transaction::new(
            "x",
            Money::from_cents(100),
            category,
            kind,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_transaction_choices_append_used_categories() {
        let txns = vec![
            txn("Pets", TransactionType::Expense),
            txn("Food", TransactionType::Expense),
            txn("Bonus", TransactionType::Income),
            txn("Pets", TransactionType::Expense),
        ];

        let choices = transaction_choices(TransactionType::Expense, &txns);
        assert_eq!(choices.len(), EXPENSE_CATEGORIES.len() + 2);
        assert_eq!(choices[0], "Food");
        assert_eq!(&choices[10..], &["Pets".to_string(), "Bonus".to_string()]);
    }

    #[test]
    fn test_budget_choices_skip_budgeted_and_income() {
        let txns = vec![
            txn("Pets", TransactionType::Expense),
            txn("Bonus", TransactionType::Income),
        ];
        let budgets = vec![Budget::new("Food", Money::from_cents(40000))];

        let choices = budget_choices(&txns, &budgets);
        assert!(!choices.contains(&"Food".to_string()));
        assert!(!choices.contains(&"Bonus".to_string()));
        assert!(choices.contains(&"Pets".to_string()));
        assert_eq!(choices.len(), EXPENSE_CATEGORIES.len());
    }
}
