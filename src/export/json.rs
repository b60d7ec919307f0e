//! JSON export
//!
//! Wraps the snapshot with a schema version and export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, SavingsGoal, Transaction};
use crate::storage::BudgetData;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub savings_goals: Vec<SavingsGoal>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
}

impl FullExport {
    pub fn from_data(data: &BudgetData) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: data.transactions.clone(),
            budgets: data.budgets.clone(),
            savings_goals: data.savings_goals.clone(),
            metadata: ExportMetadata {
                transaction_count: data.transactions.len(),
                budget_count: data.budgets.len(),
                goal_count: data.savings_goals.len(),
            },
        }
    }

    /// The snapshot this export carries
    pub fn into_data(self) -> BudgetData {
        BudgetData {
            transactions: self.transactions,
            budgets: self.budgets,
            savings_goals: self.savings_goals,
        }
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(data: &BudgetData, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_data(data);
    // Pretty-print, then end with a newline
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
