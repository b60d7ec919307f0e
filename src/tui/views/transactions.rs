//! Transactions view
//!
//! The register: search box, type filter and sort indicators, one page of
//! transactions, and totals over everything that matched.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::reports::{RegisterPage, SortField, TransactionQuery};
use crate::tui::app::{App, InputMode};

use super::titled_block;

/// Render the transaction register
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.register_page();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search and filters
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Totals
        ])
        .split(area);

    render_filters(frame, app, chunks[0]);
    render_table(frame, app, &page, chunks[1]);
    render_totals(frame, app, &page, chunks[2]);
}

fn sort_label(query: &TransactionQuery, field: SortField) -> Span<'static> {
    if query.sort_field == field {
        Span::styled(
            format!("{} {}", field, query.sort_order.arrow()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(field.to_string(), Style::default().fg(Color::DarkGray))
    }
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let query = &app.query;
    let searching = app.input_mode == InputMode::Search;

    let mut spans = app.search_input.line().spans;
    if !searching && query.search.is_empty() {
        spans.push(Span::styled("  (/ to search)", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::raw("   Type: "));
    spans.push(Span::styled(
        query.type_filter.to_string(),
        Style::default().fg(Color::Cyan),
    ));
    spans.push(Span::raw("   Sort: "));
    spans.push(sort_label(query, SortField::Date));
    spans.push(Span::raw(" / "));
    spans.push(sort_label(query, SortField::Amount));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(titled_block("Transactions")),
        area,
    );
}

fn render_table(frame: &mut Frame, app: &App, page: &RegisterPage, area: Rect) {
    if page.entries.is_empty() {
        let message = if app.storage.transactions().is_empty() {
            "No transactions yet. Press 'a' to add one."
        } else {
            "No transactions match the current search and filter."
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block("Register")),
            area,
        );
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let header = Row::new(vec!["Date", "Description", "Category", "Type", "Amount"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page
        .entries
        .iter()
        .map(|entry| {
            let txn = &entry.transaction;
            let color = if txn.is_income() { Color::Green } else { Color::Red };
            Row::new(vec![
                Cell::from(txn.date.format(&app.settings.date_format).to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.category.clone()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.signed_amount().format_signed(symbol))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(16),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(titled_block(format!(
        "Page {} of {}",
        page.page,
        page.total_pages.max(1)
    )))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_transaction.min(page.entries.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_totals(frame: &mut Frame, app: &App, page: &RegisterPage, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let totals = &page.totals;
    let balance = totals.balance();

    let line = Line::from(vec![
        Span::raw(format!("{} transactions   ", page.total_matches)),
        Span::raw("Income: "),
        Span::styled(totals.income.format_with_symbol(symbol), Style::default().fg(Color::Green)),
        Span::raw("   Expenses: "),
        Span::styled(totals.expenses.format_with_symbol(symbol), Style::default().fg(Color::Red)),
        Span::raw("   Balance: "),
        Span::styled(
            balance.format_with_symbol(symbol),
            Style::default()
                .fg(if balance.is_negative() { Color::Red } else { Color::Green })
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(titled_block("Totals")), area);
}
