//! Savings projections
//!
//! How long each goal has left and how much must be put aside monthly to
//! reach it.

use chrono::NaiveDate;

use crate::models::{Money, SavingsGoal};
use crate::storage::BudgetData;

use super::totals::Totals;

/// Projection for one goal
#[derive(Debug, Clone)]
pub struct GoalProjection {
    /// Position of the goal in the snapshot
    pub index: usize,
    pub goal: SavingsGoal,
    pub days_remaining: i64,
    /// At least 0.1
    pub months_remaining: f64,
    pub remaining: Money,
    pub monthly_needed: Money,
}

impl GoalProjection {
    pub fn new(index: usize, goal: &SavingsGoal, today: NaiveDate) -> Self {
        let days_remaining = (goal.target_date - today).num_days().max(0);
        // Floor keeps an overdue goal from dividing by zero
        let months_remaining = (days_remaining as f64 / 30.0).max(0.1);
        let remaining = goal.remaining();

        Self {
            index,
            goal: goal.clone(),
            days_remaining,
            months_remaining,
            remaining,
            monthly_needed: Money::from_decimal(remaining.to_decimal() / months_remaining),
        }
    }

    pub fn percentage(&self) -> f64 {
        self.goal.percentage()
    }

    pub fn time_until(&self) -> String {
        time_until(self.days_remaining)
    }
}

/// Human label for a number of days ahead
pub fn time_until(days: i64) -> String {
    let ceil_div = |n: i64, d: i64| (n + d - 1) / d;
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d < 7 => format!("{} days", d),
        d if d < 30 => format!("{} weeks", ceil_div(d, 7)),
        d if d < 365 => format!("{} months", ceil_div(d, 30)),
        d => format!("{} years", ceil_div(d, 365)),
    }
}

/// Savings screen summary
#[derive(Debug, Clone)]
pub struct SavingsSummary {
    /// Soonest deadline first
    pub projections: Vec<GoalProjection>,
    pub total_saved: Money,
    pub total_target: Money,
    /// Income left after expenses, never negative
    pub savings_potential: Money,
}

impl SavingsSummary {
    pub fn generate(data: &BudgetData, today: NaiveDate) -> Self {
        let mut projections: Vec<GoalProjection> = data
            .savings_goals
            .iter()
            .enumerate()
            .map(|(index, goal)| GoalProjection::new(index, goal, today))
            .collect();
        // Nearest deadline first; stable for equal dates
        projections.sort_by_key(|p| p.days_remaining);

        let totals = Totals::from_transactions(&data.transactions);

        Self {
            total_saved: data.savings_goals.iter().map(|g| g.current_amount).sum(),
            total_target: data.savings_goals.iter().map(|g| g.target_amount).sum(),
            savings_potential: totals.balance().max(Money::zero()),
            projections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use crate::reports::totals::tests::txn;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn goal(name: &str, target: i64, current: i64, date: &str) -> SavingsGoal {
        SavingsGoal::new(name, Money::from_cents(target), Money::from_cents(current), day(date))
    }

    #[test]
    fn test_time_until_labels() {
        assert_eq!(time_until(-3), "Today");
        assert_eq!(time_until(0), "Today");
        assert_eq!(time_until(1), "Tomorrow");
        assert_eq!(time_until(6), "6 days");
        assert_eq!(time_until(7), "1 weeks");
        assert_eq!(time_until(8), "2 weeks");
        assert_eq!(time_until(30), "1 months");
        assert_eq!(time_until(45), "2 months");
        assert_eq!(time_until(365), "1 years");
        assert_eq!(time_until(400), "2 years");
    }

    #[test]
    fn test_monthly_needed() {
        let projection = GoalProjection::new(0, &goal("Trip", 100000, 10000, "2025-03-02"), day("2025-01-01"));
        assert_eq!(projection.days_remaining, 60);
        assert!((projection.months_remaining - 2.0).abs() < 1e-9);
        assert_eq!(projection.remaining, Money::from_cents(90000));
        assert_eq!(projection.monthly_needed, Money::from_cents(45000));
    }

    #[test]
    fn test_overdue_goal_uses_minimum_months() {
        let projection = GoalProjection::new(0, &goal("Trip", 1000, 0, "2024-12-01"), day("2025-01-01"));
        assert_eq!(projection.days_remaining, 0);
        assert!((projection.months_remaining - 0.1).abs() < 1e-9);
        assert_eq!(projection.monthly_needed, Money::from_cents(10000));
        assert_eq!(projection.time_until(), "Today");
    }

    #[test]
    fn test_summary() {
        let data = BudgetData {
            transactions: vec![
                txn("Paycheck", 200000, "Salary", TransactionType::Income, "2025-01-01"),
                txn("Rent", 150000, "Housing", TransactionType::Expense, "2025-01-02"),
            ],
            savings_goals: vec![
                goal("Car", 500000, 100000, "2027-01-01"),
                goal("Trip", 100000, 15000, "2025-06-01"),
            ],
            ..Default::default()
        };

        let summary = SavingsSummary::generate(&data, day("2025-01-01"));
        assert_eq!(summary.projections[0].goal.name, "Trip");
        assert_eq!(summary.projections[0].index, 1);
        assert_eq!(summary.total_saved, Money::from_cents(115000));
        assert_eq!(summary.savings_potential, Money::from_cents(50000));
    }

    #[test]
    fn test_potential_never_negative() {
        let data = BudgetData {
            transactions: vec![txn("Rent", 150000, "Housing", TransactionType::Expense, "2025-01-02")],
            ..Default::default()
        };
        assert!(SavingsSummary::generate(&data, day("2025-01-01")).savings_potential.is_zero());
    }
}
