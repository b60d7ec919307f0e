//! Budget dialog
//!
//! Adding picks a category and a limit; editing changes the limit only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::category::budget_choices;
use crate::models::Budget;
use crate::services::{BudgetInput, BudgetService};
use crate::storage::BudgetData;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::transaction::cycle_choice;
use super::{error_line, hint_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Limit,
}

/// State for the budget form dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    pub focused_field: BudgetField,
    pub category_input: TextInput,
    /// Unbudgeted categories to offer
    pub category_choices: Vec<String>,
    pub limit_input: TextInput,
    pub is_edit: bool,
    pub error_message: Option<String>,
}

impl BudgetFormState {
    pub fn new(data: &BudgetData) -> Self {
        let mut state = Self {
            focused_field: BudgetField::Category,
            category_input: TextInput::new()
                .label("Category")
                .placeholder("Up/Down to pick, or type"),
            category_choices: budget_choices(&data.transactions, &data.budgets),
            limit_input: TextInput::new().label("Limit").placeholder("0.00"),
            is_edit: false,
            error_message: None,
        };
        state.set_focus(BudgetField::Category);
        state
    }

    /// Limit-only form for an existing budget
    pub fn from_budget(budget: &Budget) -> Self {
        let mut state = Self {
            category_input: TextInput::new().label("Category").content(&budget.category),
            limit_input: TextInput::new()
                .label("Limit")
                .content(budget.limit.format_plain()),
            is_edit: true,
            ..Self::default()
        };
        state.set_focus(BudgetField::Limit);
        state
    }

    pub fn set_focus(&mut self, field: BudgetField) {
        self.focused_field = field;
        self.category_input.focused = field == BudgetField::Category;
        self.limit_input.focused = field == BudgetField::Limit;
    }

    /// Toggle between the two fields; the category is fixed when editing
    pub fn switch_field(&mut self) {
        if self.is_edit {
            return;
        }
        let next = match self.focused_field {
            BudgetField::Category => BudgetField::Limit,
            BudgetField::Limit => BudgetField::Category,
        };
        self.set_focus(next);
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            BudgetField::Category => &mut self.category_input,
            BudgetField::Limit => &mut self.limit_input,
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        if let Some(choice) = cycle_choice(&self.category_choices, self.category_input.value(), forward)
        {
            self.category_input.set_value(choice);
        }
    }

    pub fn to_input(&self) -> BudgetInput {
        BudgetInput::new(self.category_input.value(), self.limit_input.value())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let form = &app.budget_form;
    let title = if form.is_edit { " Edit Budget " } else { " Add Budget " };

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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Suggestions
            Constraint::Length(1), // Limit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&form.category_input, chunks[0]);
    // Only categories without a budget are suggested
    if form.focused_field == BudgetField::Category {
        let hint = if form.category_choices.is_empty() {
            "every category has a budget; type a new one".to_string()
        } else {
            format!("{} suggestions", form.category_choices.len())
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" ".repeat(14)),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ])),
            chunks[1],
        );
    }
    frame.render_widget(&form.limit_input, chunks[2]);

    if let Some(error) = &form.error_message {
        frame.render_widget(Paragraph::new(error_line(error)), chunks[4]);
    }
    frame.render_widget(Paragraph::new(hint_line()), chunks[5]);
}

/// Handle key input for the budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.budget_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab => form.switch_field(),
        KeyCode::Enter => save_budget(app),
        KeyCode::Up if form.focused_field == BudgetField::Category => form.cycle_category(false),
        KeyCode::Down if form.focused_field == BudgetField::Category => form.cycle_category(true),
        // Ignore other shortcuts
        _ if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        _ => {
            if form.focused_input().handle_key(key) {
                form.error_message = None;
            }
        }
    }
}

fn save_budget(app: &mut App) {
    let input = app.budget_form.to_input();
    let dialog = app.active_dialog.clone();

    let mut service = BudgetService::new(app.storage);
    let result = match dialog {
        ActiveDialog::EditBudget(index) => service.update_limit(index, &input.limit),
        _ => service.create(&input),
    };

    match result {
        Ok(budget) => {
            app.close_dialog();
            app.clamp_selection();
            app.set_status(format!(
                "Budget saved: {}",
                budget.describe(&app.settings.currency_symbol)
            ));
        }
        Err(e) if e.is_user_input() => app.budget_form.set_error(e.to_string()),
        Err(e) => app.report_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_new_form_offers_unbudgeted_categories() {
        let mut data = BudgetData::default();
        data.budgets.push(Budget::new("Food", Money::from_cents(40000)));

        let mut form = BudgetFormState::new(&data);
        assert!(!form.category_choices.contains(&"Food".to_string()));
        form.cycle_category(true);
        assert_eq!(form.category_input.value(), "Housing");
    }

    #[test]
    fn test_edit_form_locks_category() {
        let budget = Budget::new("Food", Money::from_cents(40000));
        let mut form = BudgetFormState::from_budget(&budget);
        assert_eq!(form.focused_field, BudgetField::Limit);
        assert_eq!(form.limit_input.value(), "400.00");
        form.switch_field();
        assert_eq!(form.focused_field, BudgetField::Limit);
    }
}
