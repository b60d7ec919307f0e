//! Savings goal dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::SavingsGoal;
use crate::services::{GoalInput, SavingsService};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::{error_line, hint_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Name,
    Target,
    Current,
    Date,
}

impl GoalField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Target,
            Self::Target => Self::Current,
            Self::Current => Self::Date,
            Self::Date => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Target => Self::Name,
            Self::Current => Self::Target,
            Self::Date => Self::Current,
        }
    }
}

/// State for the savings goal form dialog
#[derive(Debug, Clone)]
pub struct GoalFormState {
    pub focused_field: GoalField,
    pub name_input: TextInput,
    pub target_input: TextInput,
    pub current_input: TextInput,
    pub date_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for GoalFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: GoalField::Name,
            name_input: TextInput::new().label("Name").placeholder("e.g. Emergency fund"),
            target_input: TextInput::new().label("Target").placeholder("0.00"),
            current_input: TextInput::new().label("Saved so far").content("0"),
            date_input: TextInput::new().label("Target date").placeholder("YYYY-MM-DD"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn from_goal(goal: &SavingsGoal) -> Self {
        let input = GoalInput::from_goal(goal);
        let mut state = Self::new();
        state.name_input.set_value(input.name);
        state.target_input.set_value(input.target_amount);
        state.current_input.set_value(input.current_amount);
        state.date_input.set_value(input.target_date);
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == GoalField::Name;
        self.target_input.focused = self.focused_field == GoalField::Target;
        self.current_input.focused = self.focused_field == GoalField::Current;
        self.date_input.focused = self.focused_field == GoalField::Date;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Name => &mut self.name_input,
            GoalField::Target => &mut self.target_input,
            GoalField::Current => &mut self.current_input,
            GoalField::Date => &mut self.date_input,
        }
    }

    pub fn to_input(&self) -> GoalInput {
        GoalInput {
            name: self.name_input.value().to_string(),
            target_amount: self.target_input.value().to_string(),
            current_amount: self.current_input.value().to_string(),
            target_date: self.date_input.value().to_string(),
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the goal dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let title = match app.active_dialog {
        ActiveDialog::EditGoal(_) => " Edit Savings Goal ",
        _ => " New Savings Goal ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Target
            Constraint::Length(1), // Current
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.goal_form;
    frame.render_widget(&form.name_input, chunks[0]);
    frame.render_widget(&form.target_input, chunks[1]);
    frame.render_widget(&form.current_input, chunks[2]);
    frame.render_widget(&form.date_input, chunks[3]);

    if let Some(error) = &form.error_message {
        frame.render_widget(Paragraph::new(error_line(error)), chunks[5]);
    }
    frame.render_widget(Paragraph::new(hint_line()), chunks[6]);
}

/// Handle key input for the goal dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.goal_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => save_goal(app),
        _ => {
            if form.focused_input().handle_key(key) {
                form.error_message = None;
            }
        }
    }
}

fn save_goal(app: &mut App) {
    let input = app.goal_form.to_input();
    let dialog = app.active_dialog.clone();

    let mut service = SavingsService::new(app.storage);
    let result = match dialog {
        ActiveDialog::EditGoal(index) => service.update(index, &input),
        _ => service.create(&input),
    };

    match result {
        Ok(goal) => {
            app.close_dialog();
            app.clamp_selection();
            app.set_status(format!("Saved goal: {}", goal.name));
        }
        Err(e) if e.is_user_input() => app.goal_form.set_error(e.to_string()),
        Err(e) => app.report_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_from_goal_round_trips_through_input() {
        let goal = SavingsGoal::new(
            "Trip",
            Money::from_cents(100000),
            Money::from_cents(15000),
            NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        );
        let form = GoalFormState::from_goal(&goal);
        let input = form.to_input();
        assert_eq!(input.target_amount, "1000.00");
        assert_eq!(input.current_amount, "150.00");

        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(input.validate(today).unwrap(), goal);
    }

    #[test]
    fn test_new_form_reports_missing_name() {
        let form = GoalFormState::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let err = form.to_input().validate(today).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a name for this goal");
    }
}
