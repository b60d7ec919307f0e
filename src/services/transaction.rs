//! Transaction service
//!
//! Validation and add/edit/delete for transactions. Transactions are
//! addressed by their position in the snapshot.

use tracing::info;

use super::{parse_amount, parse_date};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Transaction, TransactionType};
use crate::storage::Storage;

/// Raw form input for a transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: TransactionType,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl TransactionInput {
    /// Prefill the form from an existing transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.amount.format_plain(),
            category: txn.category.clone(),
            kind: txn.kind,
            date: txn.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Check the input and build the transaction it describes
    pub fn validate(&self) -> BudgetResult<Transaction> {
        let description = self.description.trim();
        // Checked in form order so the first problem is reported
        if description.is_empty() {
            return Err(BudgetError::validation("Please enter a description"));
        }

        let amount = parse_amount(&self.amount)
            .filter(|a| a.is_positive())
            .ok_or_else(|| BudgetError::validation("Please enter a valid amount"))?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(BudgetError::validation("Please select or enter a category"));
        }

        let date = parse_date(&self.date)
            .ok_or_else(|| BudgetError::validation("Please enter a valid date"))?;

        Ok(Transaction::new(description, amount, category, self.kind, date))
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Get a transaction by position
    pub fn get(&self, index: usize) -> BudgetResult<&Transaction> {
        self.storage
            .transactions()
            .get(index)
            .ok_or_else(|| BudgetError::transaction_not_found(format!("#{}", index.wrapping_add(1))))
    }

    /// Validate and append a new transaction
    pub fn create(&mut self, input: &TransactionInput) -> BudgetResult<Transaction> {
        // Validate
        let txn = input.validate()?;

        self.storage.update(|data| {
            // Save
            data.transactions.push(txn.clone());
            Ok(())
        })?;

        info!(
            description = %txn.description,
            amount = %txn.amount,
            category = %txn.category,
            kind = %txn.kind,
            "added transaction"
        );
        Ok(txn)
    }

    /// Replace the transaction at `index`
    ///
    /// The transaction keeps its original type whatever the input says.
    pub fn update(&mut self, index: usize, input: &TransactionInput) -> BudgetResult<Transaction> {
        // Type is fixed once recorded
        let kind = self.get(index)?.kind;
        let mut txn = input.validate()?;
        txn.kind = kind;

        self.storage.update(|data| {
            // Save
            data.transactions[index] = txn.clone();
            Ok(())
        })?;

        info!(index, description = %txn.description, "updated transaction");
        Ok(txn)
    }

    /// Remove and return the transaction at `index`
    pub fn delete(&mut self, index: usize) -> BudgetResult<Transaction> {
        // Must exist
        self.get(index)?;
        let removed = self
            .storage
            .update(|data| Ok(data.transactions.remove(index)))?;

        info!(index, description = %removed.description, "deleted transaction");
        Ok(removed)
    }
}
