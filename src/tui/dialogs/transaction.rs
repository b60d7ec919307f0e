//! Transaction entry/edit dialog
//!
//! Description, amount, type, category and date fields. The category field
//! accepts free text; Up/Down steps through the suggested categories.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::category::transaction_choices;
use crate::models::{Transaction, TransactionType};
use crate::services::{today, TransactionInput, TransactionService};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::{error_line, hint_line};

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Kind,
    Category,
    Date,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Kind => Self::Amount,
            Self::Category => Self::Kind,
            Self::Date => Self::Category,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub kind: TransactionType,
    pub category_input: TextInput,
    /// Suggestions for the current type
    pub category_choices: Vec<String>,
    pub date_input: TextInput,
    /// Editing keeps the original type
    pub is_edit: bool,
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl TransactionFormState {
    /// Empty expense form dated today
    pub fn new(transactions: &[Transaction]) -> Self {
        let kind = TransactionType::Expense;
        let mut state = Self {
            focused_field: TransactionField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            kind,
            category_input: TextInput::new()
                .label("Category")
                .placeholder("Up/Down to pick, or type"),
            category_choices: transaction_choices(kind, transactions),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today().format("%Y-%m-%d").to_string()),
            is_edit: false,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// New form that keeps the type and category of the previous entry
    pub fn continuing(transactions: &[Transaction], kind: TransactionType, category: &str) -> Self {
        let mut state = Self::new(transactions);
        state.kind = kind;
        state.category_choices = transaction_choices(kind, transactions);
        state.category_input.set_value(category);
        state
    }

    /// Form pre-populated from an existing transaction
    pub fn from_transaction(txn: &Transaction, transactions: &[Transaction]) -> Self {
        let input = TransactionInput::from_transaction(txn);
        let mut state = Self::new(transactions);
        state.is_edit = true;
        state.kind = input.kind;
        state.category_choices = transaction_choices(input.kind, transactions);
        state.description_input.set_value(input.description);
        state.amount_input.set_value(input.amount);
        state.category_input.set_value(input.category);
        state.date_input.set_value(input.date);
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
        self.description_input.focused = self.focused_field == TransactionField::Description;
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.category_input.focused = self.focused_field == TransactionField::Category;
        self.date_input.focused = self.focused_field == TransactionField::Date;
    }

    /// The focused text field; `None` on the type selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Kind => None,
            TransactionField::Category => Some(&mut self.category_input),
            TransactionField::Date => Some(&mut self.date_input),
        }
    }

    /// Switch between income and expense
    ///
    /// The category is cleared because the suggestion lists differ. Has no
    /// effect when editing.
    pub fn toggle_kind(&mut self, transactions: &[Transaction]) {
        if self.is_edit {
            return;
        }
        self.kind = self.kind.toggled();
        self.category_choices = transaction_choices(self.kind, transactions);
        self.category_input.clear();
    }

    /// Step through the suggested categories
    pub fn cycle_category(&mut self, forward: bool) {
        if let Some(choice) = cycle_choice(&self.category_choices, self.category_input.value(), forward)
        {
            self.category_input.set_value(choice);
        }
    }

    /// Raw input for the transaction service
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            description: self.description_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
            category: self.category_input.value().to_string(),
            kind: self.kind,
            date: self.date_input.value().to_string(),
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// The choice after (or before) `current`, wrapping; the first (or last)
/// choice when `current` is not in the list
pub(crate) fn cycle_choice(choices: &[String], current: &str, forward: bool) -> Option<String> {
    if choices.is_empty() {
        return None;
    }
    let len = choices.len();
    let next = match choices.iter().position(|c| c == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(choices[next].clone())
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 14, frame.area());
    frame.render_widget(Clear, area);

    let title = match app.active_dialog {
        ActiveDialog::EditTransaction(_) => " Edit Transaction ",
        _ => " Add Transaction ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    // Border and title
    frame.render_widget(block, area);

    // Fields sit inside the border with a one-column margin
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(1), // Suggestions
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;

    // Fields
    frame.render_widget(&form.description_input, chunks[0]);
    frame.render_widget(&form.amount_input, chunks[1]);
    frame.render_widget(Paragraph::new(kind_line(form)), chunks[2]);
    frame.render_widget(&form.category_input, chunks[3]);
    // Suggestions only while the category is focused
    if form.focused_field == TransactionField::Category {
        frame.render_widget(
            Paragraph::new(suggestion_line(&form.category_choices, form.category_input.value())),
            chunks[4],
        );
    }
    frame.render_widget(&form.date_input, chunks[5]);

    if let Some(error) = &form.error_message {
        frame.render_widget(Paragraph::new(error_line(error)), chunks[7]);
    }

    // Key hints
    frame.render_widget(Paragraph::new(hint_line()), chunks[8]);
}

fn kind_line(form: &TransactionFormState) -> Line<'static> {
    let focused = form.focused_field == TransactionField::Kind;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let option = |kind: TransactionType, text: &'static str| {
        let color = if kind.is_income() { Color::Green } else { Color::Red };
        if form.kind == kind {
            Span::styled(
                format!("[{}]", text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", text), Style::default().fg(Color::DarkGray))
        }
    };

    let mut spans = vec![
        Span::styled(format!("{:>12}: ", "Type"), label_style),
        option(TransactionType::Expense, "Expense"),
        Span::raw(" "),
        option(TransactionType::Income, "Income"),
    ];
    if focused && !form.is_edit {
        spans.push(Span::styled("  (Space to switch)", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn suggestion_line(choices: &[String], current: &str) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(14))];
    for choice in choices {
        let style = if choice == current {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(choice.clone(), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Handle key input for the transaction dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => save_transaction(app),
        KeyCode::Up if form.focused_field == TransactionField::Category => {
            form.cycle_category(false)
        }
        KeyCode::Down if form.focused_field == TransactionField::Category => {
            form.cycle_category(true)
        }
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if form.focused_field == TransactionField::Kind =>
        {
            form.toggle_kind(app.storage.transactions());
        }
        _ => {
            // Everything else is typing
            if let Some(input) = form.focused_input() {
                if input.handle_key(key) {
                    form.clear_error();
                }
            }
        }
    }
}

fn save_transaction(app: &mut App) {
    let input = app.transaction_form.to_input();
    let dialog = app.active_dialog.clone();

    let mut service = TransactionService::new(app.storage);
    let result = match dialog {
        ActiveDialog::EditTransaction(index) => service.update(index, &input),
        _ => service.create(&input),
    };

    match result {
        Ok(txn) => {
            // Remember type and category for the next entry
            if !matches!(dialog, ActiveDialog::EditTransaction(_)) {
                app.last_entry = Some((txn.kind, txn.category));
            }
            app.close_dialog();
            app.clamp_selection();
            app.set_status(if matches!(dialog, ActiveDialog::EditTransaction(_)) {
                "Transaction updated"
            } else {
                "Transaction added"
            });
        }
        Err(e) if e.is_user_input() => app.transaction_form.set_error(e.to_string()),
        Err(e) => app.report_failure(&e),
    }
}
