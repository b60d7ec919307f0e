//! Report formatting for terminal output

use crate::reports::{DashboardSummary, MonthlyOverview, PieChart};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar, filled proportionally and capped at `width`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn push_line(output: &mut String, label: &str, value: impl std::fmt::Display) {
    output.push_str(&format!("{:<18} {}\n", label, value));
}

/// Dashboard as printed by `budget dashboard`
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let totals = &summary.totals;
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&separator(50));
    output.push('\n');
    push_line(&mut output, "Total income:", totals.income.format_plain());
    push_line(&mut output, "Total expenses:", totals.expenses.format_plain());
    push_line(
        &mut output,
        "Balance:",
        format!("{} {}", totals.balance().abs().format_plain(), totals.balance_label()),
    );
    push_line(
        &mut output,
        "Transactions:",
        format!("{} income, {} expense", totals.income_count, totals.expense_count),
    );

    output.push_str("\nRecent transactions\n");
    if summary.recent.is_empty() {
        output.push_str("  No transactions yet.\n");
    }
    for entry in &summary.recent {
        let txn = &entry.transaction;
        output.push_str(&format!(
            "  {} {:<24} {:<14} {}\n",
            txn.date.format("%Y-%m-%d"),
            truncate(&txn.description, 24),
            truncate(&txn.category, 14),
            txn.signed_amount().format_signed(symbol)
        ));
    }

    if !summary.budgets.is_empty() {
        output.push_str("\nBudgets\n");
        for budget in &summary.budgets {
            output.push_str(&format!(
                "  {:<16} {} {} / {} {:>7} {}\n",
                truncate(&budget.category, 16),
                format_bar(budget.bar_percentage(), 100.0, 20),
                budget.spent.format_with_symbol(symbol),
                budget.limit.format_with_symbol(symbol),
                format_percentage(budget.percentage),
                budget.status()
            ));
        }
    }

    if !summary.goals.is_empty() {
        output.push_str("\nSavings goals\n");
        for goal in &summary.goals {
            output.push_str(&format!(
                "  {:<16} {} {} / {} {:>7}\n",
                truncate(&goal.name, 16),
                format_bar(goal.percentage(), 100.0, 20),
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                format_percentage(goal.percentage())
            ));
        }
    }

    if !summary.top_categories.is_empty() {
        output.push_str("\nTop spending categories\n");
        for (rank, total) in summary.top_categories.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:<16} {}\n",
                rank + 1,
                total.category,
                total.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Monthly overview as printed by `budget report`
pub fn format_monthly_overview(overview: &MonthlyOverview, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly overview: {}\n", overview.month.friendly()));
    output.push_str(&separator(50));
    output.push('\n');

    if overview.is_empty() {
        output.push_str(&overview.empty_message());
        output.push('\n');
        return output;
    }

    let totals = &overview.totals;
    push_line(&mut output, "Income:", totals.income.format_with_symbol(symbol));
    push_line(&mut output, "Expenses:", totals.expenses.format_with_symbol(symbol));
    push_line(&mut output, "Balance:", totals.balance().format_with_symbol(symbol));
    push_line(&mut output, "Savings rate:", format_percentage(overview.savings_rate));
    push_line(
        &mut output,
        "Transactions:",
        format!(
            "{} ({} income, {} expense)",
            totals.count(),
            totals.income_count,
            totals.expense_count
        ),
    );
    push_line(
        &mut output,
        "Average expense:",
        overview.average_expense.format_with_symbol(symbol),
    );
    if let Some(largest) = &overview.largest_expense {
        push_line(
            &mut output,
            "Largest expense:",
            format!("{} ({})", largest.amount.format_with_symbol(symbol), largest.description),
        );
    }
    push_line(
        &mut output,
        "Daily average:",
        overview.daily_average.format_with_symbol(symbol),
    );

    let chart = PieChart::from_totals(&overview.expenses_by_category);
    if !chart.is_empty() {
        output.push_str("\nExpenses by category\n");
        for slice in &chart.slices {
            output.push_str(&format!(
                "  {:<16} {} {:>12} {:>7}\n",
                truncate(&slice.category, 16),
                format_bar(slice.percentage, 100.0, 20),
                slice.amount.format_with_symbol(symbol),
                format_percentage(slice.percentage)
            ));
        }
    }

    if !overview.income_by_category.is_empty() {
        output.push_str("\nIncome by category\n");
        for total in &overview.income_by_category {
            output.push_str(&format!(
                "  {:<16} {:>12}\n",
                truncate(&total.category, 16),
                total.amount.format_with_symbol(symbol)
            ));
        }
    }

    if !overview.compliance.is_empty() {
        output.push_str("\nBudget compliance\n");
        for row in &overview.compliance {
            output.push_str(&format!(
                "  {:<16} {} / {} {:>7} {}\n",
                truncate(&row.category, 16),
                row.spent.format_with_symbol(symbol),
                row.limit.format_with_symbol(symbol),
                format_percentage(row.percentage),
                row.compliance()
            ));
        }
    }

    output.push_str(&format!("\nInsight: {}\n", overview.insight()));
    output
}
