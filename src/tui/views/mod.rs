//! TUI Views module
//!
//! One view per tab, plus the tab bar and the status bar.

pub mod budgets;
pub mod dashboard;
pub mod reports;
pub mod savings;
pub mod status_bar;
pub mod transactions;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::config::settings::Tab;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Tab bar
    render_tabs(frame, app, layout.tabs);

    // Active view
    match app.active_tab {
        Tab::Dashboard => dashboard::render(frame, app, layout.main),
        Tab::Transactions => transactions::render(frame, app, layout.main),
        Tab::Budgets => budgets::render(frame, app, layout.main),
        Tab::Savings => savings::render(frame, app, layout.main),
        Tab::Reports => reports::render(frame, app, layout.main),
    }

    // Status bar
    status_bar::render(frame, app, layout.status_bar);

    // Dialogs draw over everything
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Budget Planner ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddTransaction | ActiveDialog::EditTransaction(_) => {
            dialogs::transaction::render(frame, app)
        }
        ActiveDialog::AddBudget | ActiveDialog::EditBudget(_) => dialogs::budget::render(frame, app),
        ActiveDialog::AddGoal | ActiveDialog::EditGoal(_) => dialogs::goal::render(frame, app),
        ActiveDialog::Contribute(index) => dialogs::contribute::render(frame, app, *index),
        ActiveDialog::Confirm(action) => {
            dialogs::confirm::render(frame, &action.message(app.storage))
        }
    }
}

/// Convert a `#RRGGBB` palette entry to a terminal colour
pub(crate) fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0xFF)
    };
    if hex.len() == 6 {
        Color::Rgb(channel(0), channel(2), channel(4))
    } else {
        Color::White
    }
}

/// A text progress bar `width` cells wide
pub(crate) fn bar(percentage: f64, width: usize) -> String {
    crate::display::format_bar(percentage.min(100.0), 100.0, width)
}

/// Green under 75%, yellow under 90%, red otherwise
pub(crate) fn status_color(status: crate::reports::BudgetStatus) -> Color {
    match status {
        crate::reports::BudgetStatus::Safe => Color::Green,
        crate::reports::BudgetStatus::Warning => Color::Yellow,
        crate::reports::BudgetStatus::Danger => Color::Red,
    }
}

/// A bordered block with a bold title
pub(crate) fn titled_block(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
}
