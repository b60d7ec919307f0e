//! Core data models for the budget planner
//!
//! Transactions, budgets and savings goals, plus the money and month types
//! the reports are built on.

pub mod budget;
pub mod category;
pub mod money;
pub mod period;
pub mod savings_goal;
pub mod transaction;

pub use budget::Budget;
pub use category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use money::{Money, MoneyParseError};
pub use period::{month_name, MonthKey, PeriodParseError};
pub use savings_goal::SavingsGoal;
pub use transaction::{Transaction, TransactionType};
