//! Service layer for the budget planner
//!
//! Services turn raw form input into records: they validate, mutate the
//! snapshot through [`Storage`](crate::storage::Storage) and persist.

pub mod budget;
pub mod savings;
pub mod transaction;

pub use budget::{BudgetInput, BudgetService};
pub use savings::{Contribution, GoalInput, SavingsService, QUICK_CONTRIBUTIONS};
pub use transaction::{TransactionInput, TransactionService};

use chrono::NaiveDate;

use crate::models::Money;

/// Parse a form amount; `None` when blank or unparsable
pub(crate) fn parse_amount(text: &str) -> Option<Money> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Money::parse(text).ok()
}

/// Parse a form date (`YYYY-MM-DD`)
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 10.50 "), Some(Money::from_cents(1050)));
        assert_eq!(parse_amount("$10.509"), Some(Money::from_cents(1050)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("ten"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-15"), NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("15/01/2025"), None);
    }
}
