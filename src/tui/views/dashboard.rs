//! Dashboard view
//!
//! Totals across all records, recent transactions, budget and goal
//! progress, and the biggest spending categories.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::{format_percentage, truncate};
use crate::models::Money;
use crate::reports::DashboardSummary;
use crate::tui::app::App;

use super::{bar, status_color, titled_block};

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = DashboardSummary::generate(app.storage.data());
    let symbol = app.settings.currency_symbol.as_str();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    // Income, expenses and balance cards across the top
    render_cards(frame, &summary, symbol, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    // Recent transactions on the left
    render_recent(frame, app, &summary, columns[0]);

    // Budgets, goals and top categories stacked on the right
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(columns[1]);

    render_budgets(frame, &summary, side[0]);
    render_goals(frame, &summary, symbol, side[1]);
    render_top_categories(frame, &summary, symbol, side[2]);
}

fn render_cards(frame: &mut Frame, summary: &DashboardSummary, symbol: &str, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let totals = &summary.totals;
    let balance = totals.balance();
    let balance_color = if balance.is_negative() { Color::Red } else { Color::Green };

    let card = |title: &str, amount: Money, color: Color, note: String| {
        Paragraph::new(vec![
            Line::from(Span::styled(
                amount.abs().format_with_symbol(symbol),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(note, Style::default().fg(Color::DarkGray))),
        ])
        .block(titled_block(title))
    };

    frame.render_widget(
        card(
            "Income",
            totals.income,
            Color::Green,
            format!("{} transactions", totals.income_count),
        ),
        cards[0],
    );
    frame.render_widget(
        card(
            "Expenses",
            totals.expenses,
            Color::Red,
            format!("{} transactions", totals.expense_count),
        ),
        cards[1],
    );
    frame.render_widget(
        card("Balance", balance, balance_color, totals.balance_label().to_string()),
        cards[2],
    );
}

fn render_recent(frame: &mut Frame, app: &App, summary: &DashboardSummary, area: Rect) {
    let block = titled_block("Recent Transactions");

    if summary.recent.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let lines: Vec<Line> = summary
        .recent
        .iter()
        .map(|entry| {
            let txn = &entry.transaction;
            let color = if txn.is_income() { Color::Green } else { Color::Red };
            Line::from(vec![
                Span::styled(
                    format!("{} ", txn.date.format(&app.settings.date_format)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:<22} ", truncate(&txn.description, 22))),
                Span::styled(
                    format!("{:<14} ", truncate(&txn.category, 14)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    txn.signed_amount().format_signed(symbol),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_budgets(frame: &mut Frame, summary: &DashboardSummary, area: Rect) {
    let block = titled_block("Budgets");
    if summary.budgets.is_empty() {
        frame.render_widget(
            Paragraph::new("No budgets set.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = summary
        .budgets
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::raw(format!("{:<12} ", truncate(&row.category, 12))),
                Span::styled(bar(row.bar_percentage(), 12), Style::default().fg(status_color(row.status()))),
                Span::raw(format!(" {}", format_percentage(row.percentage))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_goals(frame: &mut Frame, summary: &DashboardSummary, symbol: &str, area: Rect) {
    let block = titled_block("Savings Goals");
    if summary.goals.is_empty() {
        frame.render_widget(
            Paragraph::new("No savings goals.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = summary
        .goals
        .iter()
        .map(|goal| {
            Line::from(vec![
                Span::raw(format!("{:<12} ", truncate(&goal.name, 12))),
                Span::styled(bar(goal.percentage(), 12), Style::default().fg(Color::Blue)),
                Span::raw(format!(
                    " {} / {}",
                    goal.current_amount.format_with_symbol(symbol),
                    goal.target_amount.format_with_symbol(symbol)
                )),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_top_categories(frame: &mut Frame, summary: &DashboardSummary, symbol: &str, area: Rect) {
    let lines: Vec<Line> = if summary.top_categories.is_empty() {
        vec![Line::from(Span::styled(
            "No expenses yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        summary
            .top_categories
            .iter()
            .enumerate()
            .map(|(i, total)| {
                Line::from(format!(
                    "{}. {:<16} {}",
                    i + 1,
                    truncate(&total.category, 16),
                    total.amount.format_with_symbol(symbol)
                ))
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(titled_block("Top Spending"))
            .wrap(Wrap { trim: true }),
        area,
    );
}
