//! Savings view
//!
//! Goals by deadline with progress and the monthly amount needed to reach
//! each on time.

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

use super::{bar, titled_block};

/// Render the savings goals
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.savings_summary();
    let symbol = app.settings.currency_symbol.as_str();

    let (header_area, body_area) = header_and_body(area, 3);

    let header = Line::from(vec![
        Span::raw("Saved: "),
        Span::styled(
            summary.total_saved.format_with_symbol(symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" of {}", summary.total_target.format_with_symbol(symbol))),
        Span::raw("   Savings potential: "),
        Span::styled(
            summary.savings_potential.format_with_symbol(symbol),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(titled_block("Savings Goals")),
        header_area,
    );

    if summary.projections.is_empty() {
        frame.render_widget(
            Paragraph::new("No savings goals yet. Press 'a' to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block("Goals")),
            body_area,
        );
        return;
    }

    let header_row = Row::new(vec![
        "Goal", "Saved", "Target", "Progress", "", "Deadline", "Time left", "Per month",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = summary
        .projections
        .iter()
        .map(|p| {
            let goal = &p.goal;
            let (progress_color, per_month) = if goal.is_complete() {
                (Color::Green, "done".to_string())
            } else {
                (Color::Blue, p.monthly_needed.format_with_symbol(symbol))
            };
            Row::new(vec![
                Cell::from(goal.name.clone()),
                Cell::from(goal.current_amount.format_with_symbol(symbol)),
                Cell::from(goal.target_amount.format_with_symbol(symbol)),
                Cell::from(bar(p.percentage(), 16)).style(Style::default().fg(progress_color)),
                Cell::from(format_percentage(p.percentage())),
                Cell::from(goal.target_date.format(&app.settings.date_format).to_string()),
                Cell::from(p.time_until()),
                Cell::from(per_month),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(17),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(11),
        ],
    )
    .header(header_row)
    .block(titled_block("Goals"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_goal.min(summary.projections.len() - 1)));

    frame.render_stateful_widget(table, body_area, &mut state);
}
