//! Contribution dialog
//!
//! Left/Right picks one of the quick amounts, the remaining amount, or a
//! custom amount; typing a digit switches to the custom amount.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::{Contribution, SavingsService, QUICK_CONTRIBUTIONS};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::error_line;

/// Number of choices: the quick amounts, "remaining" and "custom"
const CHOICE_COUNT: usize = QUICK_CONTRIBUTIONS.len() + 2;
const REMAINING_CHOICE: usize = QUICK_CONTRIBUTIONS.len();
const CUSTOM_CHOICE: usize = QUICK_CONTRIBUTIONS.len() + 1;

/// State for the contribution dialog
#[derive(Debug, Clone, Default)]
pub struct ContributeState {
    pub choice: usize,
    pub custom_input: TextInput,
    pub error_message: Option<String>,
}

impl ContributeState {
    pub fn new() -> Self {
        Self {
            choice: 0,
            custom_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        }
    }

    pub fn next_choice(&mut self) {
        self.select((self.choice + 1) % CHOICE_COUNT);
    }

    pub fn prev_choice(&mut self) {
        self.select((self.choice + CHOICE_COUNT - 1) % CHOICE_COUNT);
    }

    fn select(&mut self, choice: usize) {
        self.choice = choice;
        self.custom_input.focused = choice == CUSTOM_CHOICE;
        self.error_message = None;
    }

    /// The contribution the current choice stands for
    pub fn contribution(&self) -> crate::error::BudgetResult<Contribution> {
        match self.choice {
            REMAINING_CHOICE => Ok(Contribution::Remaining),
            CUSTOM_CHOICE => Contribution::parse(self.custom_input.value()),
            quick => QUICK_CONTRIBUTIONS
                .get(quick)
                .copied()
                .map(Contribution::Amount)
                .ok_or_else(|| crate::error::BudgetError::validation("Please enter a valid amount")),
        }
    }
}

/// Render the contribution dialog
pub fn render(frame: &mut Frame, app: &App, index: usize) {
    let area = centered_rect_fixed(64, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Contribute ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Goal
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Choices
            Constraint::Length(1), // Custom amount
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let symbol = &app.settings.currency_symbol;
    // Goal header
    if let Some(goal) = app.storage.savings_goals().get(index) {
        let line = Line::from(vec![
            Span::styled(goal.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "  {} of {}  ({} to go)",
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                goal.remaining().format_with_symbol(symbol)
            )),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    let state = &app.contribute_form;
    // Quick amounts, then Remaining and Custom
    let mut labels: Vec<String> = QUICK_CONTRIBUTIONS
        .iter()
        .map(|amount| format!("+{}", amount.dollars()))
        .collect();
    labels.push("Remaining".to_string());
    labels.push("Custom".to_string());

    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        let style = if i == state.choice {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    // Amount box only for Custom
    if state.choice == CUSTOM_CHOICE {
        frame.render_widget(&state.custom_input, chunks[3]);
    }
    if let Some(error) = &state.error_message {
        frame.render_widget(Paragraph::new(error_line(error)), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Contribute  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Handle key input for the contribution dialog
pub fn handle_key(app: &mut App, key: KeyEvent, index: usize) {
    let state = &mut app.contribute_form;
    let editing = state.choice == CUSTOM_CHOICE;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => contribute(app, index),
        KeyCode::Tab => state.next_choice(),
        KeyCode::BackTab => state.prev_choice(),
        KeyCode::Left if !editing => state.prev_choice(),
        KeyCode::Right if !editing => state.next_choice(),
        KeyCode::Char(c) if !editing && (c.is_ascii_digit() || c == '.') => {
            state.select(CUSTOM_CHOICE);
            state.custom_input.insert(c);
        }
        _ if editing => {
            if state.custom_input.handle_key(key) {
                state.error_message = None;
            }
        }
        _ => {}
    }
}

fn contribute(app: &mut App, index: usize) {
    let contribution = match app.contribute_form.contribution() {
        Ok(contribution) => contribution,
        Err(e) => {
            app.contribute_form.error_message = Some(e.to_string());
            return;
        }
    };

    let result = SavingsService::new(app.storage).contribute(index, contribution);
    match result {
        Ok(goal) => {
            app.close_dialog();
            if goal.is_complete() {
                app.set_status(format!("{} reached its target!", goal.name));
            } else {
                app.set_status(format!(
                    "{} now at {}",
                    goal.name,
                    goal.current_amount.format_with_symbol(&app.settings.currency_symbol)
                ));
            }
        }
        Err(e) if e.is_user_input() => app.contribute_form.error_message = Some(e.to_string()),
        Err(e) => app.report_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_choices_cycle_through_quick_remaining_custom() {
        let mut state = ContributeState::new();
        assert_eq!(
            state.contribution().unwrap(),
            Contribution::Amount(Money::from_cents(1000))
        );

        state.prev_choice();
        assert_eq!(state.choice, CUSTOM_CHOICE);
        assert!(state.custom_input.focused);

        state.prev_choice();
        assert_eq!(state.contribution().unwrap(), Contribution::Remaining);

        state.next_choice();
        state.next_choice();
        assert_eq!(state.choice, 0);
    }

    #[test]
    fn test_custom_amount_must_be_positive() {
        let mut state = ContributeState::new();
        state.select(CUSTOM_CHOICE);
        assert!(state.contribution().is_err());

        state.custom_input.set_value("12.5");
        assert_eq!(
            state.contribution().unwrap(),
            Contribution::Amount(Money::from_cents(1250))
        );
    }
}
