//! Confirmation dialog
//!
//! Yes/no prompt shown before a record is deleted.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::BudgetResult;
use crate::services::{BudgetService, SavingsService, TransactionService};
use crate::storage::Storage;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// A deletion waiting for confirmation; indices are snapshot positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTransaction(usize),
    DeleteBudget(usize),
    DeleteGoal(usize),
}

impl ConfirmAction {
    /// The question to ask
    pub fn message(&self, storage: &Storage) -> String {
        match *self {
            Self::DeleteTransaction(i) => match storage.transactions().get(i) {
                Some(txn) => format!("Delete transaction \"{}\"?", txn.description),
                None => "Delete this transaction?".to_string(),
            },
            Self::DeleteBudget(i) => match storage.budgets().get(i) {
                Some(budget) => format!("Delete the {} budget?", budget.category),
                None => "Delete this budget?".to_string(),
            },
            Self::DeleteGoal(i) => match storage.savings_goals().get(i) {
                Some(goal) => format!("Delete savings goal \"{}\"?", goal.name),
                None => "Delete this savings goal?".to_string(),
            },
        }
    }

    /// Carry out the deletion; returns the status line to show
    pub fn perform(&self, storage: &mut Storage) -> BudgetResult<String> {
        match *self {
            Self::DeleteTransaction(i) => {
                let txn = TransactionService::new(storage).delete(i)?;
                Ok(format!("Deleted transaction: {}", txn.description))
            }
            Self::DeleteBudget(i) => {
                let budget = BudgetService::new(storage).delete(i)?;
                Ok(format!("Deleted budget: {}", budget.category))
            }
            Self::DeleteGoal(i) => {
                let goal = SavingsService::new(storage).delete(i)?;
                Ok(format!("Deleted savings goal: {}", goal.name))
            }
        }
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Handle key input for the confirmation dialog
pub fn handle_key(app: &mut App, key: KeyEvent, action: ConfirmAction) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            match action.perform(app.storage) {
                Ok(status) => {
                    app.clamp_selection();
                    app.set_status(status);
                }
                Err(e) => app.report_failure(&e),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}
