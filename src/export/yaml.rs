//! YAML export
//!
//! Same content as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::storage::BudgetData;

/// Export everything as YAML with a short header comment
pub fn export_full_yaml<W: Write>(data: &BudgetData, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_data(data);
    let err = |e: std::io::Error| BudgetError::Export(e.to_string());

    // Header comment
    writeln!(writer, "# Budget Planner export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    // Body
    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
