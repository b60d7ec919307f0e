//! Shared aggregation over transactions

use crate::models::{Money, Transaction, TransactionType};

/// Income and expense totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl Totals {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => {
                    totals.income += txn.amount;
                    totals.income_count += 1;
                }
                TransactionType::Expense => {
                    totals.expenses += txn.amount;
                    totals.expense_count += 1;
                }
            }
        }
        totals
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income - self.expenses
    }

    /// `surplus` when the balance is zero or positive, else `deficit`
    pub fn balance_label(&self) -> &'static str {
        if self.balance().is_negative() {
            "deficit"
        } else {
            "surplus"
        }
    }

    pub fn count(&self) -> usize {
        self.income_count + self.expense_count
    }
}

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

/// Sum amounts of `kind` per category, in order of first appearance
pub fn totals_by_category<'a, I>(transactions: I, kind: TransactionType) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions.into_iter().filter(|t| t.kind == kind) {
        match totals.iter_mut().find(|t| t.category == txn.category) {
            Some(total) => total.amount += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                amount: txn.amount,
            }),
        }
    }
    totals
}

/// Stable sort by amount, largest first
pub fn ranked(mut totals: Vec<CategoryTotal>) -> Vec<CategoryTotal> {
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}
