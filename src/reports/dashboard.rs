//! Dashboard summary
//!
//! Everything the landing screen shows, computed in one pass over the
//! snapshot.

use crate::models::{SavingsGoal, Transaction, TransactionType};
use crate::storage::BudgetData;

use super::budget_status::{budget_progress, BudgetProgress};
use super::totals::{ranked, totals_by_category, CategoryTotal, Totals};

/// Number of recent transactions on the dashboard
pub const RECENT_LIMIT: usize = 5;

/// Number of expense categories in the top list
pub const TOP_CATEGORY_LIMIT: usize = 3;

/// A transaction together with its position in the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTransaction {
    pub index: usize,
    pub transaction: Transaction,
}

/// Dashboard summary
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub totals: Totals,
    /// Newest first
    pub recent: Vec<IndexedTransaction>,
    /// In snapshot order
    pub budgets: Vec<BudgetProgress>,
    pub goals: Vec<SavingsGoal>,
    pub top_categories: Vec<CategoryTotal>,
}

impl DashboardSummary {
    pub fn generate(data: &BudgetData) -> Self {
        let transactions = &data.transactions;

        Self {
            totals: Totals::from_transactions(transactions),
            recent: recent_transactions(transactions, RECENT_LIMIT),
            budgets: budget_progress(&data.budgets, transactions),
            goals: data.savings_goals.clone(),
            top_categories: ranked(totals_by_category(transactions, TransactionType::Expense))
                .into_iter()
                .take(TOP_CATEGORY_LIMIT)
                .collect(),
        }
    }
}

/// The `limit` latest transactions by date; same-day entries keep their order
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<IndexedTransaction> {
    let mut indexed: Vec<IndexedTransaction> = transactions
        .iter()
        .enumerate()
        .map(|(index, txn)| IndexedTransaction {
            index,
            transaction: txn.clone(),
        })
        .collect();
    indexed.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));
    indexed.truncate(limit);
    indexed
}
