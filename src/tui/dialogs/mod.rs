//! Dialog modules for the TUI
//!
//! Modal forms for transactions, budgets and goals, plus contributions,
//! delete confirmation and help.

pub mod budget;
pub mod confirm;
pub mod contribute;
pub mod goal;
pub mod help;
pub mod transaction;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// The single inline error line under a form
pub(crate) fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red)))
}

/// Key hints shared by the forms
pub(crate) fn hint_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ])
}
