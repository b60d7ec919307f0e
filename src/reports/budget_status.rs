//! Budget progress and compliance

use std::fmt;

use crate::models::{Budget, Money, Transaction};

/// How close spending is to a budget's limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    /// >= 90% danger, >= 75% warning
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Danger
        } else if percentage >= 75.0 {
            Self::Warning
        } else {
            Self::Safe
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Whether a month's spending stayed under the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceStatus {
    Within,
    Exceeded,
}

impl ComplianceStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else {
            Self::Within
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within => write!(f, "within"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Spending against one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    /// Position of the budget in the snapshot
    pub index: usize,
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Unclamped
    pub percentage: f64,
}

impl BudgetProgress {
    pub fn new<'a, I>(index: usize, budget: &Budget, transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let spent = budget.spent(transactions);
        Self {
            index,
            category: budget.category.clone(),
            limit: budget.limit,
            spent,
            percentage: budget.percentage(spent),
        }
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage)
    }

    pub fn compliance(&self) -> ComplianceStatus {
        ComplianceStatus::from_percentage(self.percentage)
    }

    /// Fill ratio for progress bars, capped at 100
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }

    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// Progress for every budget, in snapshot order
pub fn budget_progress(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .enumerate()
        .map(|(index, budget)| BudgetProgress::new(index, budget, transactions))
        .collect()
}

/// The budgets screen: rows by percentage descending plus totals
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    pub rows: Vec<BudgetProgress>,
    pub total_budgeted: Money,
    pub total_spent: Money,
}

impl BudgetSummary {
    pub fn generate(budgets: &[Budget], transactions: &[Transaction]) -> Self {
        let mut rows = budget_progress(budgets, transactions);
        rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

        Self {
            total_budgeted: rows.iter().map(|r| r.limit).sum(),
            total_spent: rows.iter().map(|r| r.spent).sum(),
            rows,
        }
    }
}
