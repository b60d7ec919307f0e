//! The persisted snapshot
//!
//! Every collection lives in one JSON object that is rewritten wholesale on
//! each change.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, SavingsGoal, Transaction};

/// All persisted collections, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetData {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub savings_goals: Vec<SavingsGoal>,
}

impl BudgetData {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.savings_goals.is_empty()
    }

    /// Whether a budget already exists for `category`
    pub fn has_budget_for(&self, category: &str) -> bool {
        self.budgets.iter().any(|b| b.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_missing_keys_load_empty() {
        let data: BudgetData = serde_json::from_str(r#"{"budgets": [{"category": "Food", "limit": 400}]}"#).unwrap();
        assert!(data.transactions.is_empty());
        assert!(data.savings_goals.is_empty());
        assert!(data.has_budget_for("Food"));
        assert!(!data.has_budget_for("food"));
    }

    #[test]
    fn test_snapshot_shape() {
        let data = BudgetData {
            transactions: vec![Transaction::new(
                "Lunch",
                Money::from_cents(1250),
                "Food",
                TransactionType::Expense,
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            )],
            budgets: vec![Budget::new("Food", Money::from_cents(40000))],
            savings_goals: vec![SavingsGoal::new(
                "Trip",
                Money::from_cents(100000),
                Money::from_cents(15000),
                NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            )],
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "transactions": [{"description": "Lunch", "amount": 12.5, "category": "Food", "type": "expense", "date": "2025-01-15"}],
                "budgets": [{"category": "Food", "limit": 400}],
                "savingsGoals": [{"name": "Trip", "targetAmount": 1000, "currentAmount": 150, "targetDate": "2026-06-01"}]
            })
        );

        let back: BudgetData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
