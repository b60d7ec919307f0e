//! Export of the snapshot
//!
//! - CSV: transactions, spreadsheet-compatible
//! - JSON: everything, machine-readable
//! - YAML: everything, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
