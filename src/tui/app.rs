//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Records live in [`Storage`]; everything here is transient view state.

use tracing::warn;

use crate::config::settings::{Settings, Tab};
use crate::error::BudgetError;
use crate::models::{MonthKey, TransactionType};
use crate::reports::{BudgetSummary, RegisterPage, SavingsSummary, TransactionQuery};
use crate::services::today;
use crate::storage::Storage;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::confirm::ConfirmAction;
use super::dialogs::contribute::ContributeState;
use super::dialogs::goal::GoalFormState;
use super::dialogs::transaction::TransactionFormState;
use super::widgets::input::TextInput;

/// Ticks a status message stays visible (250ms each)
const STATUS_TICKS: u16 = 20;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the transaction search box
    Search,
}

/// Currently active dialog (if any); indices are snapshot positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    AddTransaction,
    EditTransaction(usize),
    AddBudget,
    EditBudget(usize),
    AddGoal,
    EditGoal(usize),
    Contribute(usize),
    Confirm(ConfirmAction),
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a mut Storage,
    pub settings: &'a Settings,

    pub should_quit: bool,
    pub active_tab: Tab,
    pub active_dialog: ActiveDialog,
    pub input_mode: InputMode,

    pub status_message: Option<String>,
    status_ticks: u16,

    /// Search, filter, sort and page of the register
    pub query: TransactionQuery,
    pub search_input: TextInput,
    /// Row on the current register page
    pub selected_transaction: usize,
    /// Row in the budget list (sorted by percentage)
    pub selected_budget: usize,
    /// Row in the goal list (sorted by deadline)
    pub selected_goal: usize,

    /// Month shown on the reports tab
    pub report_month: MonthKey,

    pub transaction_form: TransactionFormState,
    /// Type and category of the last added transaction, reused by the next
    pub last_entry: Option<(TransactionType, String)>,
    pub budget_form: BudgetFormState,
    pub goal_form: GoalFormState,
    pub contribute_form: ContributeState,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_tab: settings.default_tab,
            active_dialog: ActiveDialog::None,
            input_mode: InputMode::Normal,
            status_message: None,
            status_ticks: 0,
            query: TransactionQuery::new(),
            search_input: TextInput::new().label("Search").placeholder("description or category"),
            selected_transaction: 0,
            selected_budget: 0,
            selected_goal: 0,
            report_month: MonthKey::of(today()),
            transaction_form: TransactionFormState::default(),
            last_entry: None,
            budget_form: BudgetFormState::default(),
            goal_form: GoalFormState::default(),
            contribute_form: ContributeState::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a message in the status bar for a few seconds
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Periodic update; expires the status message
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Log a failure that is not the user's input and show it
    ///
    /// An unsaved change still took effect, so its dialog is closed.
    pub fn report_failure(&mut self, err: &BudgetError) {
        warn!(error = %err, "operation failed");
        if err.is_not_saved() {
            self.close_dialog();
            self.clamp_selection();
            self.set_status(err.to_string());
        } else {
            self.set_status(format!("Error: {}", err));
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
    }

    /// Open a dialog, preparing its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddTransaction => {
                let transactions = self.storage.transactions();
                self.transaction_form = match &self.last_entry {
                    Some((kind, category)) => {
                        TransactionFormState::continuing(transactions, *kind, category)
                    }
                    None => TransactionFormState::new(transactions),
                };
            }
            ActiveDialog::EditTransaction(index) => {
                let transactions = self.storage.transactions();
                match transactions.get(*index) {
                    Some(txn) => {
                        self.transaction_form =
                            TransactionFormState::from_transaction(txn, transactions);
                    }
                    None => return,
                }
            }
            ActiveDialog::AddBudget => {
                self.budget_form = BudgetFormState::new(self.storage.data());
            }
            ActiveDialog::EditBudget(index) => match self.storage.budgets().get(*index) {
                Some(budget) => self.budget_form = BudgetFormState::from_budget(budget),
                None => return,
            },
            ActiveDialog::AddGoal => {
                self.goal_form = GoalFormState::new();
            }
            ActiveDialog::EditGoal(index) => match self.storage.savings_goals().get(*index) {
                Some(goal) => self.goal_form = GoalFormState::from_goal(goal),
                None => return,
            },
            ActiveDialog::Contribute(index) => {
                if *index >= self.storage.savings_goals().len() {
                    return;
                }
                self.contribute_form = ContributeState::new();
            }
            ActiveDialog::Help | ActiveDialog::Confirm(_) | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The register page for the current query
    pub fn register_page(&self) -> RegisterPage {
        self.query.run(self.storage.transactions())
    }

    /// Snapshot position of the highlighted transaction
    pub fn selected_transaction_index(&self) -> Option<usize> {
        self.register_page()
            .entries
            .get(self.selected_transaction)
            .map(|entry| entry.index)
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        BudgetSummary::generate(self.storage.budgets(), self.storage.transactions())
    }

    /// Snapshot position of the highlighted budget
    pub fn selected_budget_index(&self) -> Option<usize> {
        self.budget_summary()
            .rows
            .get(self.selected_budget)
            .map(|row| row.index)
    }

    pub fn savings_summary(&self) -> SavingsSummary {
        SavingsSummary::generate(self.storage.data(), today())
    }

    /// Snapshot position of the highlighted goal
    pub fn selected_goal_index(&self) -> Option<usize> {
        self.savings_summary()
            .projections
            .get(self.selected_goal)
            .map(|p| p.index)
    }

    fn list_len(&self) -> usize {
        match self.active_tab {
            Tab::Transactions => self.register_page().entries.len(),
            Tab::Budgets => self.storage.budgets().len(),
            Tab::Savings => self.storage.savings_goals().len(),
            Tab::Dashboard | Tab::Reports => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::Transactions => Some(&mut self.selected_transaction),
            Tab::Budgets => Some(&mut self.selected_budget),
            Tab::Savings => Some(&mut self.selected_goal),
            Tab::Dashboard | Tab::Reports => None,
        }
    }

    /// Move selection up in the active tab's list
    pub fn move_up(&mut self) {
        if let Some(selected) = self.selection_mut() {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Move selection down in the active tab's list
    pub fn move_down(&mut self) {
        let len = self.list_len();
        if let Some(selected) = self.selection_mut() {
            if *selected + 1 < len {
                *selected += 1;
            }
        }
    }

    /// Keep every selection inside its list after records change
    pub fn clamp_selection(&mut self) {
        let page = self.register_page();
        // The register may have lost its last page
        self.query.page = page.page;
        self.selected_transaction = self
            .selected_transaction
            .min(page.entries.len().saturating_sub(1));
        self.selected_budget = self
            .selected_budget
            .min(self.storage.budgets().len().saturating_sub(1));
        self.selected_goal = self
            .selected_goal
            .min(self.storage.savings_goals().len().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        let page = self.register_page();
        if page.page < page.total_pages {
            self.query.page = page.page + 1;
            self.selected_transaction = 0;
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.register_page();
        if page.page > 1 {
            self.query.page = page.page - 1;
            self.selected_transaction = 0;
        }
    }

    /// Start over from the first page after the query changed
    pub fn reset_register(&mut self) {
        self.query.page = 1;
        self.selected_transaction = 0;
    }

    /// Copy the search box into the query
    pub fn apply_search(&mut self) {
        self.query.search = self.search_input.value().to_string();
        self.reset_register();
    }

    pub fn prev_month(&mut self) {
        self.report_month = self.report_month.prev();
    }

    pub fn next_month(&mut self) {
        self.report_month = self.report_month.next();
    }

    /// Same month, one year earlier (or later)
    pub fn shift_year(&mut self, delta: i32) {
        self.report_month.year += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Budget, Money, SavingsGoal, Transaction, TransactionType};
    use crate::storage::BudgetData;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage(temp: &TempDir, transactions: usize) -> Storage {
        let mut data = BudgetData::default();
        for i in 0..transactions {
            data.transactions.push(Transaction::new(
                format!("Item {}", i),
                Money::from_cents(100 * (i as i64 + 1)),
                "Food",
                TransactionType::Expense,
                NaiveDate::from_ymd_opt(2025, 1, 1 + i as u32 % 28).unwrap(),
            ));
        }
        data.budgets.push(Budget::new("Food", Money::from_cents(100)));
        data.budgets.push(Budget::new("Fun", Money::from_cents(100)));
        data.savings_goals.push(SavingsGoal::new(
            "Trip",
            Money::from_cents(1000),
            Money::zero(),
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        ));
        Storage::with_data(BudgetPaths::with_base_dir(temp.path().to_path_buf()), data)
    }

    #[test]
    fn test_starts_on_default_tab() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp, 0);
        let settings = Settings {
            default_tab: Tab::Savings,
            ..Settings::default()
        };
        let app = App::new(&mut storage, &settings);
        assert_eq!(app.active_tab, Tab::Savings);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp, 3);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.switch_tab(Tab::Transactions);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_transaction, 2);
        app.move_up();
        assert_eq!(app.selected_transaction, 1);

        app.switch_tab(Tab::Budgets);
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_budget, 1);
    }

    #[test]
    fn test_paging_and_selected_index() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp, 12);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        // Newest first: the last record is on top of page one
        assert_eq!(app.selected_transaction_index(), Some(11));
        app.next_page();
        assert_eq!(app.query.page, 2);
        assert_eq!(app.register_page().entries.len(), 2);
        app.next_page();
        assert_eq!(app.query.page, 2);
        app.prev_page();
        app.prev_page();
        assert_eq!(app.query.page, 1);
    }

    #[test]
    fn test_open_dialog_ignores_missing_records() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp, 1);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.open_dialog(ActiveDialog::EditGoal(5));
        assert!(!app.has_dialog());

        app.open_dialog(ActiveDialog::EditTransaction(0));
        assert_eq!(app.active_dialog, ActiveDialog::EditTransaction(0));
        assert_eq!(app.transaction_form.description_input.value(), "Item 0");
    }

    #[test]
    fn test_status_expires_after_ticks() {
        let temp = TempDir::new().unwrap();
        let mut storage = storage(&temp, 0);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.set_status("Saved");
        for _ in 0..STATUS_TICKS - 1 {
            app.tick();
        }
        assert_eq!(app.status_message.as_deref(), Some("Saved"));
        app.tick();
        assert!(app.status_message.is_none());
    }
}
