//! Budget formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{BudgetProgress, BudgetSummary};

use super::report::{format_bar, format_percentage};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetRow {
    fn new(row: &BudgetProgress, symbol: &str) -> Self {
        Self {
            number: row.index + 1,
            category: row.category.clone(),
            spent: row.spent.format_with_symbol(symbol),
            limit: row.limit.format_with_symbol(symbol),
            bar: format_bar(row.bar_percentage(), 100.0, 20),
            percentage: format_percentage(row.percentage),
            status: row.status().to_string(),
        }
    }
}

/// Budgets by percentage used, with totals
pub fn format_budget_list(summary: &BudgetSummary, symbol: &str) -> String {
    if summary.rows.is_empty() {
        return "No budgets set. Add one with `budget budget add <category> <limit>`.\n".to_string();
    }

    let rows: Vec<BudgetRow> = summary
        .rows
        .iter()
        .map(|row| BudgetRow::new(row, symbol))
        .collect();
    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\nTotal budgeted: {}  Total spent: {}\n",
        summary.total_budgeted.format_with_symbol(symbol),
        summary.total_spent.format_with_symbol(symbol)
    ));
    output
}

/// A numbered picker list
pub fn format_category_choices(choices: &[String]) -> String {
    choices
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}. {}\n", i + 1, c))
        .collect()
}
