//! Budget model
//!
//! A spending limit for one category. At most one budget exists per
//! category; that rule is enforced when a budget is created.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::transaction::Transaction;

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: Money,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// Total expenses in this budget's category among `transactions`
    pub fn spent<'a, I>(&self, transactions: I) -> Money
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .filter(|t| t.is_expense() && t.category == self.category)
            .map(|t| t.amount)
            .sum()
    }

    /// `spent` as a percentage of the limit, unclamped
    pub fn percentage(&self, spent: Money) -> f64 {
        spent.percent_of(self.limit)
    }

    pub fn describe(&self, symbol: &str) -> String {
        format!("{}: {}", self.category, self.limit.format_with_symbol(symbol))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn txn(category: &str, cents: i64, kind: TransactionType) -> Transaction {
        Transaction::new(
            "x",
            Money::from_cents(cents),
            category,
            kind,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_spent_counts_only_matching_expenses() {
        let budget = Budget::new("Food", Money::from_cents(40000));
        let transactions = vec![
            txn("Food", 5000, TransactionType::Expense),
            txn("Food", 2500, TransactionType::Expense),
            txn("Food", 9900, TransactionType::Income),
            txn("Housing", 120000, TransactionType::Expense),
        ];

        assert_eq!(budget.spent(&transactions), Money::from_cents(7500));
    }

    #[test]
    fn test_percentage_unclamped() {
        let budget = Budget::new("Food", Money::from_cents(10000));
        assert_eq!(budget.percentage(Money::from_cents(15000)), 150.0);
        assert_eq!(budget.percentage(Money::zero()), 0.0);
    }

    #[test]
    fn test_serialization_shape() {
        let budget = Budget::new("Food", Money::from_cents(40000));
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json, serde_json::json!({"category": "Food", "limit": 400}));
    }
}
