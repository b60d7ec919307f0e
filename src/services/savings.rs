//! Savings goal service
//!
//! Goal validation, add/edit/delete and contributions.

use chrono::NaiveDate;
use tracing::info;

use super::{parse_amount, parse_date, today};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, SavingsGoal};
use crate::storage::Storage;

/// One-keystroke contribution amounts offered alongside "remaining"
pub const QUICK_CONTRIBUTIONS: [Money; 4] = [
    Money::from_cents(1000),
    Money::from_cents(2500),
    Money::from_cents(5000),
    Money::from_cents(10000),
];

/// Raw form input for a savings goal
#[derive(Debug, Clone, Default)]
pub struct GoalInput {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    /// `YYYY-MM-DD`
    pub target_date: String,
}

impl GoalInput {
    /// Prefill the form from an existing goal
    pub fn from_goal(goal: &SavingsGoal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.format_plain(),
            current_amount: goal.current_amount.format_plain(),
            target_date: goal.target_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Check the input and build the goal it describes
    ///
    /// A target date equal to `today` is accepted.
    pub fn validate(&self, today: NaiveDate) -> BudgetResult<SavingsGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BudgetError::validation("Please enter a name for this goal"));
        }

        let target = parse_amount(&self.target_amount)
            .filter(|a| a.is_positive())
            .ok_or_else(|| BudgetError::validation("Please enter a valid target amount"))?;

        let current = parse_amount(&self.current_amount)
            .filter(|a| !a.is_negative())
            .ok_or_else(|| BudgetError::validation("Please enter a valid current amount"))?;

        // Saved so far cannot exceed the target
        if current > target {
            return Err(BudgetError::validation(
                "Current amount cannot be greater than target amount",
            ));
        }

        // Deadline
        if self.target_date.trim().is_empty() {
            return Err(BudgetError::validation("Please set a target date"));
        }
        let target_date = parse_date(&self.target_date)
            .ok_or_else(|| BudgetError::validation("Please enter a valid date"))?;
        if target_date < today {
            return Err(BudgetError::validation("Target date cannot be in the past"));
        }

        Ok(SavingsGoal::new(name, target, current, target_date))
    }
}

/// How much to add to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    Amount(Money),
    /// Whatever is left to reach the target
    Remaining,
}

impl Contribution {
    /// Parse an amount or the word `remaining`
    pub fn parse(text: &str) -> BudgetResult<Self> {
        if text.trim().eq_ignore_ascii_case("remaining") {
            return Ok(Self::Remaining);
        }
        parse_amount(text)
            .filter(|a| a.is_positive())
            .map(Self::Amount)
            .ok_or_else(|| BudgetError::validation("Please enter a valid amount"))
    }

    fn resolve(self, goal: &SavingsGoal) -> Money {
        match self {
            Self::Amount(amount) => amount,
            Self::Remaining => goal.remaining(),
        }
    }
}

/// Service for savings goal management
pub struct SavingsService<'a> {
    storage: &'a mut Storage,
}

impl<'a> SavingsService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Get a goal by position
    pub fn get(&self, index: usize) -> BudgetResult<&SavingsGoal> {
        self.storage
            .savings_goals()
            .get(index)
            .ok_or_else(|| BudgetError::goal_not_found(format!("#{}", index.wrapping_add(1))))
    }

    pub fn create(&mut self, input: &GoalInput) -> BudgetResult<SavingsGoal> {
        // Validate
        let goal = input.validate(today())?;

        self.storage.update(|data| {
            // Save
            data.savings_goals.push(goal.clone());
            Ok(())
        })?;

        info!(name = %goal.name, target = %goal.target_amount, "added savings goal");
        Ok(goal)
    }

    pub fn update(&mut self, index: usize, input: &GoalInput) -> BudgetResult<SavingsGoal> {
        self.get(index)?;
        let goal = input.validate(today())?;

        self.storage.update(|data| {
            // Save
            data.savings_goals[index] = goal.clone();
            Ok(())
        })?;

        info!(index, name = %goal.name, "updated savings goal");
        Ok(goal)
    }

    pub fn delete(&mut self, index: usize) -> BudgetResult<SavingsGoal> {
        self.get(index)?;
        let removed = self
            .storage
            .update(|data| Ok(data.savings_goals.remove(index)))?;

        info!(name = %removed.name, "deleted savings goal");
        Ok(removed)
    }

    /// Add money to a goal; the saved amount stops at the target
    pub fn contribute(&mut self, index: usize, contribution: Contribution) -> BudgetResult<SavingsGoal> {
        let amount = contribution.resolve(self.get(index)?);
        // "remaining" on a finished goal resolves to zero
        if !amount.is_positive() {
            return Err(BudgetError::validation("Please enter a valid amount"));
        }

        let goal = self.storage.update(|data| {
            let goal = &mut data.savings_goals[index];
            // Capped at the target
            goal.contribute(amount);
            Ok(goal.clone())
        })?;

        info!(
            name = %goal.name,
            amount = %amount,
            current = %goal.current_amount,
            "contributed to savings goal"
        );
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(name: &str, target: &str, current: &str, date: &str) -> GoalInput {
        GoalInput {
            name: name.into(),
            target_amount: target.into(),
            current_amount: current.into(),
            target_date: date.into(),
        }
    }

    fn future() -> String {
        (today() + Duration::days(90)).format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_validation_messages_in_order() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let message = |i: GoalInput| i.validate(day).unwrap_err().to_string();

        assert_eq!(message(input(" ", "", "", "")), "Please enter a name for this goal");
        assert_eq!(message(input("Trip", "0", "", "")), "Please enter a valid target amount");
        assert_eq!(message(input("Trip", "1000", "", "")), "Please enter a valid current amount");
        assert_eq!(message(input("Trip", "1000", "-1", "")), "Please enter a valid current amount");
        assert_eq!(
            message(input("Trip", "1000", "1500", "")),
            "Current amount cannot be greater than target amount"
        );
        assert_eq!(message(input("Trip", "1000", "0", "")), "Please set a target date");
        assert_eq!(message(input("Trip", "1000", "0", "June")), "Please enter a valid date");
        assert_eq!(
            message(input("Trip", "1000", "0", "2025-05-31")),
            "Target date cannot be in the past"
        );
    }

    #[test]
    fn test_today_is_a_valid_target_date() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let goal = input("Trip", "1000", "1000", "2025-06-01").validate(day).unwrap();
        assert!(goal.is_complete());
    }

    #[test]
    fn test_contribution_parsing() {
        assert_eq!(Contribution::parse("remaining").unwrap(), Contribution::Remaining);
        assert_eq!(
            Contribution::parse("25").unwrap(),
            Contribution::Amount(Money::from_cents(2500))
        );
        assert!(Contribution::parse("0").is_err());
        assert!(Contribution::parse("-10").is_err());
    }

    #[test]
    fn test_contribute_never_exceeds_target() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = SavingsService::new(&mut storage);
        service.create(&input("Trip", "1000", "950", &future())).unwrap();

        let goal = service
            .contribute(0, Contribution::Amount(Money::from_cents(10000)))
            .unwrap();
        assert_eq!(goal.current_amount, Money::from_cents(100000));

        // Nothing left to add once complete
        assert!(service.contribute(0, Contribution::Remaining).is_err());
    }

    #[test]
    fn test_contribute_remaining_completes_goal() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = SavingsService::new(&mut storage);
        service.create(&input("Trip", "1000", "150", &future())).unwrap();

        let goal = service.contribute(0, Contribution::Remaining).unwrap();
        assert!(goal.is_complete());
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = SavingsService::new(&mut storage);
        service.create(&input("Trip", "1000", "150", &future())).unwrap();

        let updated = service.update(0, &input("Big trip", "2000", "150", &future())).unwrap();
        assert_eq!(updated.target_amount, Money::from_cents(200000));

        assert!(service.update(0, &input("", "2000", "150", &future())).is_err());
        assert_eq!(service.delete(0).unwrap().name, "Big trip");
        assert!(service.delete(0).unwrap_err().is_not_found());
    }
}
