//! Budgets view
//!
//! Every budget with spending against its limit, fullest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_percentage;
use crate::tui::app::App;
use crate::tui::layout::header_and_body;

use super::{bar, status_color, titled_block};

/// Render the budget list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.budget_summary();
    let symbol = app.settings.currency_symbol.as_str();

    let (header_area, body_area) = header_and_body(area, 3);

    let header = Line::from(vec![
        Span::raw("Total budgeted: "),
        Span::styled(
            summary.total_budgeted.format_with_symbol(symbol),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Total spent: "),
        Span::styled(
            summary.total_spent.format_with_symbol(symbol),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header).block(titled_block("Budgets")), header_area);

    if summary.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No budgets yet. Press 'a' to set a spending limit for a category.")
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block("Categories")),
            body_area,
        );
        return;
    }

    let header_row = Row::new(vec!["Category", "Spent", "Limit", "Remaining", "Progress", "", "Status"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = summary
        .rows
        .iter()
        .map(|row| {
            let color = status_color(row.status());
            let remaining = row.remaining();
            Row::new(vec![
                Cell::from(row.category.clone()),
                Cell::from(row.spent.format_with_symbol(symbol)),
                Cell::from(row.limit.format_with_symbol(symbol)),
                Cell::from(remaining.format_with_symbol(symbol)).style(Style::default().fg(
                    if remaining.is_negative() { Color::Red } else { Color::White },
                )),
                Cell::from(bar(row.bar_percentage(), 20)).style(Style::default().fg(color)),
                Cell::from(format_percentage(row.percentage)),
                Cell::from(row.status().to_string()).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(21),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header_row)
    .block(titled_block("Categories"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_budget.min(summary.rows.len() - 1)));

    frame.render_stateful_widget(table, body_area, &mut state);
}
