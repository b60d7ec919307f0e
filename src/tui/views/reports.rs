//! Reports view
//!
//! Monthly overview for the selected month: totals and savings rate, an
//! insight, spending statistics, the expense breakdown in chart colours and
//! budget compliance.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::{format_percentage, truncate};
use crate::reports::{
    available_months, available_years, ComplianceStatus, Insight, MonthlyOverview, PieChart,
};
use crate::services::today;
use crate::tui::app::App;
use crate::tui::layout::header_and_body;

use super::{bar, hex_color, titled_block};

/// Render the monthly overview
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let overview = MonthlyOverview::generate(app.storage.data(), app.report_month);
    let symbol = app.settings.currency_symbol.as_str();

    let (header_area, body_area) = header_and_body(area, 4);

    // Month navigation header
    let title = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            overview.month.friendly(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "   h/l month  [/] year  t today  g save chart",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(vec![title, selector_line(app)]).block(titled_block("Monthly Overview")),
        header_area,
    );

    // Nothing recorded for this month
    if overview.is_empty() {
        frame.render_widget(
            Paragraph::new(overview.empty_message())
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block("Summary")),
            body_area,
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body_area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(columns[0]);

    // Left: summary, insight, statistics
    render_summary(frame, &overview, symbol, left[0]);
    render_insight(frame, overview.insight(), left[1]);
    render_statistics(frame, app, &overview, symbol, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    // Right: category breakdown and budget compliance
    render_breakdown(frame, &overview, symbol, right[0]);
    render_compliance(frame, &overview, symbol, right[1]);
}

fn choice_span(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray))
    }
}

/// Years and months that have activity, with the shown month marked
fn selector_line(app: &App) -> Line<'static> {
    let selected = app.report_month;
    let today = today();
    let transactions = app.storage.transactions();

    let mut spans = vec![Span::raw("Years:")];
    for year in available_years(transactions, today) {
        spans.push(choice_span(year.to_string(), year == selected.year));
    }
    spans.push(Span::raw("  Months:"));
    for month in available_months(transactions, today) {
        spans.push(choice_span(format!("{:02}", month), month == selected.month));
    }
    Line::from(spans)
}

fn amount_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<16}", label)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn render_summary(frame: &mut Frame, overview: &MonthlyOverview, symbol: &str, area: Rect) {
    let totals = &overview.totals;
    let balance = totals.balance();
    let balance_color = if balance.is_negative() { Color::Red } else { Color::Green };

    let lines = vec![
        amount_line("Income", totals.income.format_with_symbol(symbol), Color::Green),
        amount_line("Expenses", totals.expenses.format_with_symbol(symbol), Color::Red),
        amount_line(
            "Balance",
            format!("{} {}", balance.abs().format_with_symbol(symbol), totals.balance_label()),
            balance_color,
        ),
        amount_line(
            "Savings rate",
            format_percentage(overview.savings_rate),
            Color::Cyan,
        ),
        Line::from(Span::styled(
            format!(
                "{} income, {} expense transactions",
                totals.income_count, totals.expense_count
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(titled_block("Summary")), area);
}

fn render_insight(frame: &mut Frame, insight: Insight, area: Rect) {
    let color = match insight {
        Insight::Overspent => Color::Red,
        Insight::LowSavings => Color::Yellow,
        Insight::Excellent => Color::Green,
        Insight::Balanced => Color::Cyan,
    };

    frame.render_widget(
        Paragraph::new(insight.message())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(titled_block("Insight")),
        area,
    );
}

fn render_statistics(
    frame: &mut Frame,
    app: &App,
    overview: &MonthlyOverview,
    symbol: &str,
    area: Rect,
) {
    let mut lines = vec![
        amount_line(
            "Average expense",
            overview.average_expense.format_with_symbol(symbol),
            Color::White,
        ),
        amount_line(
            "Daily average",
            overview.daily_average.format_with_symbol(symbol),
            Color::White,
        ),
    ];

    if let Some(txn) = &overview.largest_expense {
        lines.push(amount_line(
            "Largest expense",
            txn.amount.format_with_symbol(symbol),
            Color::Red,
        ));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} ({}, {})",
                truncate(&txn.description, 24),
                txn.category,
                txn.date.format(&app.settings.date_format)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !overview.income_by_category.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Income sources",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for total in &overview.income_by_category {
            lines.push(Line::from(format!(
                "  {:<16} {}",
                truncate(&total.category, 16),
                total.amount.format_with_symbol(symbol)
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(titled_block("Statistics")), area);
}

fn render_breakdown(frame: &mut Frame, overview: &MonthlyOverview, symbol: &str, area: Rect) {
    let chart = PieChart::from_totals(&overview.expenses_by_category);

    let lines: Vec<Line> = if chart.is_empty() {
        vec![Line::from(Span::styled(
            "No expenses this month.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        chart
            .slices
            .iter()
            .map(|slice| {
                let color = hex_color(slice.color);
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(color)),
                    Span::raw(format!("{:<14} ", truncate(&slice.category, 14))),
                    Span::styled(bar(slice.percentage, 14), Style::default().fg(color)),
                    Span::raw(format!(
                        " {:>6} {}",
                        format_percentage(slice.percentage),
                        slice.amount.format_with_symbol(symbol)
                    )),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Expenses by Category")),
        area,
    );
}

fn render_compliance(frame: &mut Frame, overview: &MonthlyOverview, symbol: &str, area: Rect) {
    let lines: Vec<Line> = if overview.compliance.is_empty() {
        vec![Line::from(Span::styled(
            "No budgets set.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        overview
            .compliance
            .iter()
            .map(|row| {
                let (mark, color) = match row.compliance() {
                    ComplianceStatus::Within => ("✓", Color::Green),
                    ComplianceStatus::Exceeded => ("✗", Color::Red),
                };
                Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(color)),
                    Span::raw(format!("{:<14} ", truncate(&row.category, 14))),
                    Span::raw(format!(
                        "{} / {} ",
                        row.spent.format_with_symbol(symbol),
                        row.limit.format_with_symbol(symbol)
                    )),
                    Span::styled(row.compliance().to_string(), Style::default().fg(color)),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Budget Compliance")),
        area,
    );
}
