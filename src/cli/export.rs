//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (everything)
    Json,
    /// YAML (everything, human-readable)
    Yaml,
    /// CSV (transactions only)
    Csv,
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_full_json(storage.data(), writer),
        ExportFormat::Yaml => export_full_yaml(storage.data(), writer),
        ExportFormat::Csv => export_transactions_csv(storage.transactions(), writer),
    }
}

/// Export to `output`, or stdout when no file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, format, &mut handle)?;
        }
    }

    Ok(())
}
