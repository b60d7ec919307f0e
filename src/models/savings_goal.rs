//! Savings goal model
//!
//! A named target amount with a deadline. The saved amount always stays
//! within `[0, target_amount]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
        }
    }

    /// Amount still to be saved
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Progress towards the target in percent
    pub fn percentage(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Add `amount` to the saved total, never going past the target
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount = (self.current_amount + amount).min(self.target_amount);
    }

    /// One-line summary, amounts in `symbol`
    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "{}: {} / {} by {}",
            self.name,
            self.current_amount.format_with_symbol(symbol),
            self.target_amount.format_with_symbol(symbol),
            self.target_date.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: i64, target: i64) -> SavingsGoal {
        SavingsGoal::new(
            "Trip",
            Money::from_cents(target),
            Money::from_cents(current),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_contribute_caps_at_target() {
        let mut g = goal(90000, 100000);
        g.contribute(Money::from_cents(2500));
        assert_eq!(g.current_amount, Money::from_cents(92500));

        g.contribute(Money::from_cents(10000));
        assert_eq!(g.current_amount, Money::from_cents(100000));
        assert!(g.is_complete());
        assert!(g.remaining().is_zero());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(goal(15000, 100000).percentage(), 15.0);
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(goal(15000, 100000)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Trip",
                "targetAmount": 1000,
                "currentAmount": 150,
                "targetDate": "2026-06-01"
            })
        );
    }
}
