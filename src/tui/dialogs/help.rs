//! Help dialog
//!
//! Shows the keys for the active tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::settings::Tab;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_tab))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:>10}  ", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

/// Help lines for a tab
pub fn help_lines(tab: Tab) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("1-5", "Jump to a tab"),
        key_line("Tab", "Next tab"),
        key_line("Shift+Tab", "Previous tab"),
        Line::from(""),
    ];

    match tab {
        Tab::Dashboard => {
            lines.push(heading("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add transaction"));
        }
        Tab::Transactions => {
            lines.push(heading("Transactions"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection"));
            lines.push(key_line("n/p", "Next/previous page"));
            lines.push(key_line("a", "Add transaction"));
            lines.push(key_line("e / Enter", "Edit transaction"));
            lines.push(key_line("d", "Delete transaction"));
            lines.push(key_line("/", "Search description or category"));
            lines.push(key_line("f", "Cycle type filter"));
            lines.push(key_line("s", "Sort by date (again to flip)"));
            lines.push(key_line("m", "Sort by amount (again to flip)"));
            lines.push(key_line("Esc", "Clear search"));
        }
        Tab::Budgets => {
            lines.push(heading("Budgets"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection"));
            lines.push(key_line("a", "Add budget"));
            lines.push(key_line("e / Enter", "Edit limit"));
            lines.push(key_line("d", "Delete budget"));
        }
        Tab::Savings => {
            lines.push(heading("Savings Goals"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection"));
            lines.push(key_line("a", "Add goal"));
            lines.push(key_line("e", "Edit goal"));
            lines.push(key_line("c / Enter", "Contribute"));
            lines.push(key_line("d", "Delete goal"));
        }
        Tab::Reports => {
            lines.push(heading("Monthly Report"));
            lines.push(Line::from(""));
            lines.push(key_line("h/l ←/→", "Previous/next month"));
            lines.push(key_line("[ / ]", "Previous/next year"));
            lines.push(key_line("t", "Back to this month"));
            lines.push(key_line("g", "Save expense chart as SVG"));
        }
    }

    lines
}
