//! CSV export
//!
//! Transactions only, one row each, in snapshot order.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> BudgetResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let err = |e: csv::Error| BudgetError::Export(e.to_string());

    // Write header
    csv.write_record(["Date", "Description", "Category", "Type", "Amount"])
        .map_err(err)?;

    // Amounts are unsigned; the Type column carries the direction
    for txn in transactions {
        csv.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.kind.to_string(),
            txn.amount.format_plain(),
        ])
        .map_err(err)?;
    }

    csv.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
