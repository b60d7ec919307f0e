//! Path management for Budget Planner
//!
//! Resolves where the snapshot, settings and log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_PLANNER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/budget-planner` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_PLANNER_DATA_DIR";

/// Manages all paths used by Budget Planner
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all Budget Planner data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BudgetError> {
        // An empty override counts as unset
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted snapshot
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("budget_data.json")
    }

    /// Where an unreadable snapshot is moved before it gets overwritten
    pub fn corrupt_data_file(&self) -> PathBuf {
        self.base_dir.join("budget_data.json.corrupt")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("budget.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "budget-planner")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_file(), temp_dir.path().join("budget_data.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("planner");
        let paths = BudgetPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
