//! Budget service
//!
//! Category budgets: one per category, created once, afterwards only the
//! limit can change.

use tracing::info;

use super::parse_amount;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};
use crate::storage::{BudgetData, Storage};

/// Raw form input for a budget
#[derive(Debug, Clone, Default)]
pub struct BudgetInput {
    pub category: String,
    pub limit: String,
}

impl BudgetInput {
    pub fn new(category: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            limit: limit.into(),
        }
    }

    /// Check the input against the existing snapshot
    ///
    /// The duplicate check only applies when creating.
    pub fn validate_new(&self, data: &BudgetData) -> BudgetResult<Budget> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(BudgetError::validation("Please select or enter a category"));
        }

        let limit = parse_limit(&self.limit)?;

        // One budget per category, exact match
        if data.has_budget_for(category) {
            return Err(BudgetError::DuplicateBudget(category.to_string()));
        }

        Ok(Budget::new(category, limit))
    }
}

fn parse_limit(text: &str) -> BudgetResult<Money> {
    parse_amount(text)
        .filter(|a| a.is_positive())
        .ok_or_else(|| BudgetError::validation("Please enter a valid limit amount"))
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Get a budget by position
    pub fn get(&self, index: usize) -> BudgetResult<&Budget> {
        self.storage
            .budgets()
            .get(index)
            .ok_or_else(|| BudgetError::budget_not_found(format!("#{}", index.wrapping_add(1))))
    }

    /// Create a budget for a category that has none yet
    pub fn create(&mut self, input: &BudgetInput) -> BudgetResult<Budget> {
        // Validate
        let budget = input.validate_new(self.storage.data())?;

        self.storage.update(|data| {
            // Save
            data.budgets.push(budget.clone());
            Ok(())
        })?;

        info!(category = %budget.category, limit = %budget.limit, "added budget");
        Ok(budget)
    }

    /// Change the limit of the budget at `index`
    pub fn update_limit(&mut self, index: usize, limit: &str) -> BudgetResult<Budget> {
        self.get(index)?;
        // Only the limit is editable
        let limit = parse_limit(limit)?;

        let budget = self.storage.update(|data| {
            // Save
            data.budgets[index].limit = limit;
            Ok(data.budgets[index].clone())
        })?;

        info!(category = %budget.category, limit = %budget.limit, "updated budget");
        Ok(budget)
    }

    /// Remove and return the budget at `index`
    pub fn delete(&mut self, index: usize) -> BudgetResult<Budget> {
        self.get(index)?;
        let removed = self.storage.update(|data| Ok(data.budgets.remove(index)))?;

        info!(category = %removed.category, "deleted budget");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_validation_messages() {
        let data = BudgetData::default();
        let message = |c: &str, l: &str| BudgetInput::new(c, l).validate_new(&data).unwrap_err().to_string();

        assert_eq!(message("", "100"), "Please select or enter a category");
        assert_eq!(message("Food", ""), "Please enter a valid limit amount");
        assert_eq!(message("Food", "0"), "Please enter a valid limit amount");
        assert_eq!(message("Food", "lots"), "Please enter a valid limit amount");
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);

        service.create(&BudgetInput::new("Food", "400")).unwrap();
        let err = service.create(&BudgetInput::new("Food", "500")).unwrap_err();

        assert!(matches!(err, BudgetError::DuplicateBudget(_)));
        assert_eq!(err.to_string(), "A budget for Food already exists");
        assert_eq!(storage.budgets().len(), 1);
        assert_eq!(storage.budgets()[0].limit, Money::from_cents(40000));
    }

    #[test]
    fn test_update_changes_only_limit() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service.create(&BudgetInput::new("Food", "400")).unwrap();

        let updated = service.update_limit(0, "450.75").unwrap();
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.limit, Money::from_cents(45075));

        assert!(service.update_limit(0, "0").is_err());
        assert!(service.update_limit(3, "10").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_frees_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = BudgetService::new(&mut storage);
        service.create(&BudgetInput::new("Food", "400")).unwrap();

        service.delete(0).unwrap();
        service.create(&BudgetInput::new("Food", "300")).unwrap();
        assert_eq!(storage.budgets().len(), 1);
    }
}
