//! Storage layer for the budget planner
//!
//! `Storage` owns the in-memory snapshot for the session and mirrors it to
//! `budget_data.json` with atomic writes after every change.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::BudgetData;

use tracing::{debug, info, warn};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, SavingsGoal, Transaction};

/// Owner of the session's records
pub struct Storage {
    paths: BudgetPaths,
    data: BudgetData,
}

impl Storage {
    /// Open storage, loading the snapshot if one exists
    ///
    /// A snapshot that cannot be parsed is copied aside to
    /// `budget_data.json.corrupt` and the session starts empty.
    pub fn open(paths: BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let data_file = paths.data_file();
        let data = match read_json::<BudgetData, _>(&data_file) {
            Ok(data) => {
                debug!(
                    transactions = data.transactions.len(),
                    budgets = data.budgets.len(),
                    goals = data.savings_goals.len(),
                    "loaded snapshot"
                );
                data
            }
            // Keep the unreadable file aside and start empty
            Err(BudgetError::Json(reason)) => {
                let corrupt = paths.corrupt_data_file();
                warn!(%reason, backup = %corrupt.display(), "snapshot unreadable, starting empty");
                if let Err(e) = std::fs::copy(&data_file, &corrupt) {
                    warn!(error = %e, "could not preserve unreadable snapshot");
                }
                BudgetData::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { paths, data })
    }

    /// Storage around an existing snapshot; nothing is read from disk
    pub fn with_data(paths: BudgetPaths, data: BudgetData) -> Self {
        Self { paths, data }
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    pub fn data(&self) -> &BudgetData {
        &self.data
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.data.budgets
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.data.savings_goals
    }

    /// Write the whole snapshot to disk
    pub fn save(&self) -> BudgetResult<()> {
        write_json_atomic(self.paths.data_file(), &self.data)?;
        info!(path = %self.paths.data_file().display(), "saved snapshot");
        Ok(())
    }

    /// Apply a change to the snapshot and persist it
    ///
    /// The closure's error aborts before anything is written. If the change
    /// succeeds but the write fails, the change stays in memory and
    /// [`BudgetError::NotSaved`] is returned; the next successful save
    /// writes it out.
    pub fn update<T, F>(&mut self, change: F) -> BudgetResult<T>
    where
        F: FnOnce(&mut BudgetData) -> BudgetResult<T>,
    {
        // Change first; a rejected change never reaches disk
        let result = change(&mut self.data)?;
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist snapshot");
            return Err(BudgetError::NotSaved(e.to_string()));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open(temp_dir: &TempDir) -> Storage {
        Storage::open(BudgetPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_open_without_snapshot_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = open(&temp_dir);
        assert!(storage.data().is_empty());
        assert!(!storage.paths().data_file().exists());
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = open(&temp_dir);

        storage
            .update(|data| {
                data.transactions.push(Transaction::new(
                    "Paycheck",
                    Money::from_cents(200000),
                    "Salary",
                    TransactionType::Income,
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                ));
                Ok(())
            })
            .unwrap();

        let reloaded = open(&temp_dir);
        assert_eq!(reloaded.transactions().len(), 1);
        assert_eq!(reloaded.transactions()[0].description, "Paycheck");
    }

    #[test]
    fn test_failed_update_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = open(&temp_dir);

        let result: BudgetResult<()> =
            storage.update(|_| Err(BudgetError::validation("Please enter a description")));

        assert!(result.is_err());
        assert!(!storage.paths().data_file().exists());
    }

    #[test]
    fn test_unwritable_snapshot_keeps_change_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let paths = BudgetPaths::with_base_dir(blocker);
        let mut storage = Storage::with_data(paths, BudgetData::default());

        let result = storage.update(|data| {
            data.budgets.push(Budget::new("Food", Money::from_cents(40000)));
            Ok(())
        });

        let err = result.unwrap_err();
        assert!(err.is_not_saved());
        assert!(err.to_string().starts_with("Changed but not saved"));
        assert_eq!(storage.budgets().len(), 1);
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("budget_data.json");
        std::fs::write(&data_file, "{\"transactions\": [oops").unwrap();

        let storage = open(&temp_dir);

        assert!(storage.data().is_empty());
        let preserved = std::fs::read_to_string(temp_dir.path().join("budget_data.json.corrupt")).unwrap();
        assert_eq!(preserved, "{\"transactions\": [oops");
    }
}
