//! Monthly overview
//!
//! Groups transactions by calendar month and summarises the selected one.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{Money, MonthKey, Transaction, TransactionType};
use crate::storage::BudgetData;

use super::budget_status::{budget_progress, BudgetProgress};
use super::totals::{totals_by_category, CategoryTotal, Totals};

/// Days the daily average is spread over
const DAYS_PER_MONTH: i64 = 30;

/// Months (1-12) that have transactions, plus the current month; ascending
pub fn available_months(transactions: &[Transaction], today: NaiveDate) -> Vec<u32> {
    let mut months: BTreeSet<u32> = transactions.iter().map(|t| t.date.month()).collect();
    months.insert(today.month());
    months.into_iter().collect()
}

/// Years that have transactions, plus the current year; newest first
pub fn available_years(transactions: &[Transaction], today: NaiveDate) -> Vec<i32> {
    let mut years: BTreeSet<i32> = transactions.iter().map(|t| t.date.year()).collect();
    years.insert(today.year());
    years.into_iter().rev().collect()
}

/// Distinct months that have transactions, oldest first
pub fn months_with_activity(transactions: &[Transaction]) -> Vec<MonthKey> {
    let keys: BTreeSet<MonthKey> = transactions.iter().map(|t| MonthKey::of(t.date)).collect();
    keys.into_iter().collect()
}

/// One-line verdict on a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    Overspent,
    LowSavings,
    Excellent,
    Balanced,
}

impl Insight {
    pub fn evaluate(balance: Money, savings_rate: f64) -> Self {
        if balance.is_negative() {
            Self::Overspent
        } else if savings_rate < 10.0 {
            Self::LowSavings
        } else if savings_rate >= 30.0 {
            Self::Excellent
        } else {
            Self::Balanced
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Overspent => {
                "You spent more than you earned this month. Consider reviewing your budget categories."
            }
            Self::LowSavings => {
                "Your savings rate is quite low. Aim for at least 20% of your income in savings."
            }
            Self::Excellent => "Great job! Your savings rate is excellent. Keep up the good work.",
            Self::Balanced => {
                "Your finances are balanced. Look for opportunities to increase your savings rate."
            }
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Summary of a single month
#[derive(Debug, Clone)]
pub struct MonthlyOverview {
    pub month: MonthKey,
    pub totals: Totals,
    /// Percent of income kept; 0 without income
    pub savings_rate: f64,
    /// First-appearance order
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    /// Budgets measured against this month's spending only
    pub compliance: Vec<BudgetProgress>,
    pub average_expense: Money,
    pub largest_expense: Option<Transaction>,
    pub daily_average: Money,
}

impl MonthlyOverview {
    pub fn generate(data: &BudgetData, month: MonthKey) -> Self {
        let transactions: Vec<Transaction> = data
            .transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect();

        let totals = Totals::from_transactions(&transactions);
        let savings_rate = savings_rate(totals.income, totals.expenses);
        // Avoid dividing by zero in a month with no expenses
        let expense_count = totals.expense_count.max(1) as i64;

        // Ties keep the earliest recorded
        let largest_expense = transactions
            .iter()
            .filter(|t| t.is_expense())
            .fold(None::<&Transaction>, |best, t| match best {
                Some(b) if b.amount >= t.amount => Some(b),
                _ => Some(t),
            })
            .cloned();

        Self {
            month,
            savings_rate,
            expenses_by_category: totals_by_category(&transactions, TransactionType::Expense),
            income_by_category: totals_by_category(&transactions, TransactionType::Income),
            compliance: budget_progress(&data.budgets, &transactions),
            average_expense: Money::from_cents(totals.expenses.cents() / expense_count),
            largest_expense,
            daily_average: Money::from_cents(totals.expenses.cents() / DAYS_PER_MONTH),
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.count() == 0
    }

    pub fn empty_message(&self) -> String {
        format!("No transactions found for {}", self.month.friendly())
    }

    pub fn insight(&self) -> Insight {
        Insight::evaluate(self.totals.balance(), self.savings_rate)
    }
}

/// `(income - expenses) / income * 100`, or 0 without income
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    if income.is_positive() {
        (income - expenses).cents() as f64 / income.cents() as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Budget;
    use crate::reports::budget_status::ComplianceStatus;
    use crate::reports::totals::tests::txn;

    fn data() -> BudgetData {
        BudgetData {
            transactions: vec![
                txn("Paycheck", 300000, "Salary", TransactionType::Income, "2025-03-01"),
                txn("Rent", 120000, "Housing", TransactionType::Expense, "2025-03-02"),
                txn("Groceries", 30000, "Food", TransactionType::Expense, "2025-03-10"),
                txn("Dinner", 15000, "Food", TransactionType::Expense, "2025-03-15"),
                txn("Old rent", 110000, "Housing", TransactionType::Expense, "2025-02-02"),
                txn("Last year", 1000, "Food", TransactionType::Expense, "2024-03-05"),
            ],
            budgets: vec![
                Budget::new("Food", Money::from_cents(40000)),
                Budget::new("Housing", Money::from_cents(120000)),
            ],
            ..Default::default()
        }
    }

    fn march() -> MonthKey {
        MonthKey::new(2025, 3).unwrap()
    }

    #[test]
    fn test_month_totals() {
        let overview = MonthlyOverview::generate(&data(), march());

        assert_eq!(overview.totals.income, Money::from_cents(300000));
        assert_eq!(overview.totals.expenses, Money::from_cents(165000));
        assert_eq!(overview.totals.balance(), Money::from_cents(135000));
        assert!((overview.savings_rate - 45.0).abs() < 1e-9);
        assert_eq!(overview.insight(), Insight::Excellent);
        assert_eq!(overview.totals.count(), 4);
        assert_eq!(overview.average_expense, Money::from_cents(55000));
        assert_eq!(overview.daily_average, Money::from_cents(5500));
        assert_eq!(overview.largest_expense.as_ref().unwrap().description, "Rent");
    }

    #[test]
    fn test_month_categories_and_compliance() {
        let overview = MonthlyOverview::generate(&data(), march());

        let names: Vec<_> = overview
            .expenses_by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, ["Housing", "Food"]);
        assert_eq!(overview.income_by_category[0].amount, Money::from_cents(300000));

        let food = &overview.compliance[0];
        assert_eq!(food.spent, Money::from_cents(45000));
        assert_eq!(food.compliance(), ComplianceStatus::Exceeded);
        assert_eq!(overview.compliance[1].compliance(), ComplianceStatus::Exceeded);
    }

    #[test]
    fn test_empty_month() {
        let overview = MonthlyOverview::generate(&data(), MonthKey::new(2025, 7).unwrap());
        assert!(overview.is_empty());
        assert_eq!(overview.savings_rate, 0.0);
        assert!(overview.largest_expense.is_none());
        assert!(overview.average_expense.is_zero());
        assert_eq!(overview.empty_message(), "No transactions found for July 2025");
    }

    #[test]
    fn test_insights() {
        assert_eq!(Insight::evaluate(Money::from_cents(-1), 0.0), Insight::Overspent);
        assert_eq!(Insight::evaluate(Money::zero(), 0.0), Insight::LowSavings);
        assert_eq!(Insight::evaluate(Money::from_cents(100), 9.99), Insight::LowSavings);
        assert_eq!(Insight::evaluate(Money::from_cents(100), 10.0), Insight::Balanced);
        assert_eq!(Insight::evaluate(Money::from_cents(100), 30.0), Insight::Excellent);
    }

    #[test]
    fn test_available_months_and_years() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        let txns = data().transactions;

        assert_eq!(available_months(&txns, today), vec![2, 3, 8]);
        assert_eq!(available_years(&txns, today), vec![2026, 2025, 2024]);
        assert_eq!(
            months_with_activity(&txns),
            vec![
                MonthKey::new(2024, 3).unwrap(),
                MonthKey::new(2025, 2).unwrap(),
                MonthKey::new(2025, 3).unwrap(),
            ]
        );
    }
}
