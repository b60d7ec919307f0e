//! Savings goal formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{GoalProjection, SavingsSummary};

use super::report::{format_bar, format_percentage};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

impl GoalRow {
    fn new(p: &GoalProjection, symbol: &str) -> Self {
        Self {
            number: p.index + 1,
            name: p.goal.name.clone(),
            saved: p.goal.current_amount.format_with_symbol(symbol),
            target: p.goal.target_amount.format_with_symbol(symbol),
            bar: format_bar(p.percentage(), 100.0, 20),
            percentage: format_percentage(p.percentage()),
            due: format!("{} ({})", p.goal.target_date.format("%Y-%m-%d"), p.time_until()),
            monthly: if p.goal.is_complete() {
                "done".to_string()
            } else {
                p.monthly_needed.format_with_symbol(symbol)
            },
        }
    }
}

/// Goals by deadline with saving totals
pub fn format_savings_summary(summary: &SavingsSummary, symbol: &str) -> String {
    let mut output = String::new();

    if summary.projections.is_empty() {
        output.push_str("No savings goals yet.\n");
    } else {
        let rows: Vec<GoalRow> = summary
            .projections
            .iter()
            .map(|p| GoalRow::new(p, symbol))
            .collect();
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "Total saved: {} of {}  Savings potential: {}\n",
        summary.total_saved.format_with_symbol(symbol),
        summary.total_target.format_with_symbol(symbol),
        summary.savings_potential.format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoal};
    use crate::storage::BudgetData;
    use chrono::NaiveDate;

    #[test]
    fn test_savings_summary() {
        let data = BudgetData {
            savings_goals: vec![SavingsGoal::new(
                "Trip",
                Money::from_cents(100000),
                Money::from_cents(10000),
                NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            )],
            ..Default::default()
        };

        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let text = format_savings_summary(&SavingsSummary::generate(&data, today), "$");
        assert!(text.contains("Trip"));
        assert!(text.contains("2 months"));
        assert!(text.contains("$450.00"));
        assert!(text.contains("Total saved: $100.00 of $1000.00"));
    }
}
