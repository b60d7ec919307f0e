//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer. Records are
//! numbered from 1 on the command line.

pub mod budget;
pub mod dashboard;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use clap::ValueEnum;

use crate::models::TransactionType;
use crate::reports::TypeFilter;

/// Snapshot position for a 1-based record number; 0 maps to a position
/// that never exists
pub(crate) fn index_of(number: usize) -> usize {
    number.checked_sub(1).unwrap_or(usize::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Income,
    Expense,
}

impl From<FilterArg> for TypeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => TypeFilter::All,
            FilterArg::Income => TypeFilter::Income,
            FilterArg::Expense => TypeFilter::Expense,
        }
    }
}
