//! Event handler for the TUI
//!
//! Routes key events to the open dialog, the search box, or the active
//! tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::settings::Tab;
use crate::models::MonthKey;
use crate::reports::{MonthlyOverview, PieChart, SortField};
use crate::services::today;

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::dialogs::confirm::ConfirmAction;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Dialogs take all input while open
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    // Search box or the normal keymap
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::None => {}
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::AddTransaction | ActiveDialog::EditTransaction(_) => {
            dialogs::transaction::handle_key(app, key)
        }
        ActiveDialog::AddBudget | ActiveDialog::EditBudget(_) => dialogs::budget::handle_key(app, key),
        ActiveDialog::AddGoal | ActiveDialog::EditGoal(_) => dialogs::goal::handle_key(app, key),
        ActiveDialog::Contribute(index) => dialogs::contribute::handle_key(app, key, index),
        ActiveDialog::Confirm(action) => dialogs::confirm::handle_key(app, key, action),
    }
}

/// Typing into the register search box; the filter updates as you type
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.search_input.focused = false;
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.search_input.focused = false;
            app.input_mode = InputMode::Normal;
            app.apply_search();
        }
        _ => {
            if app.search_input.handle_key(key) {
                app.apply_search();
            }
        }
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Tab => {
            app.switch_tab(app.active_tab.next());
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.switch_tab(Tab::ALL[index]);
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return;
        }
        _ => {}
    }

    // Tab-specific keys
    match app.active_tab {
        Tab::Dashboard => handle_dashboard_key(app, key),
        Tab::Transactions => handle_transactions_key(app, key),
        Tab::Budgets => handle_budgets_key(app, key),
        Tab::Savings => handle_savings_key(app, key),
        Tab::Reports => handle_reports_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('a') | KeyCode::Char('n') = key.code {
        app.open_dialog(ActiveDialog::AddTransaction);
    }
}

fn handle_transactions_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(index) = app.selected_transaction_index() {
                app.open_dialog(ActiveDialog::EditTransaction(index));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(index) = app.selected_transaction_index() {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteTransaction(index)));
            }
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.focused = true;
            app.search_input.move_end();
        }
        // Filter and sort start again from page one
        KeyCode::Char('f') => {
            app.query.type_filter = app.query.type_filter.cycle();
            app.reset_register();
        }
        KeyCode::Char('s') => {
            app.query.toggle_sort(SortField::Date);
            app.reset_register();
        }
        KeyCode::Char('m') => {
            app.query.toggle_sort(SortField::Amount);
            app.reset_register();
        }
        KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => app.prev_page(),
        KeyCode::Esc => {
            app.search_input.clear();
            app.apply_search();
            app.clear_status();
        }
        _ => {}
    }
}

fn handle_budgets_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddBudget),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(index) = app.selected_budget_index() {
                app.open_dialog(ActiveDialog::EditBudget(index));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(index) = app.selected_budget_index() {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteBudget(index)));
            }
        }
        _ => {}
    }
}

fn handle_savings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddGoal),
        KeyCode::Char('e') => {
            if let Some(index) = app.selected_goal_index() {
                app.open_dialog(ActiveDialog::EditGoal(index));
            }
        }
        KeyCode::Char('c') | KeyCode::Enter => {
            if let Some(index) = app.selected_goal_index() {
                app.open_dialog(ActiveDialog::Contribute(index));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(index) = app.selected_goal_index() {
                app.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteGoal(index)));
            }
        }
        _ => {}
    }
}

fn handle_reports_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Month
        KeyCode::Char('h') | KeyCode::Left => app.prev_month(),
        KeyCode::Char('l') | KeyCode::Right => app.next_month(),
        // Year
        KeyCode::Char('[') => app.shift_year(-1),
        KeyCode::Char(']') => app.shift_year(1),
        KeyCode::Char('t') => app.report_month = MonthKey::of(today()),
        KeyCode::Char('g') => save_chart(app),
        _ => {}
    }
}

/// Write the month's expense chart next to the data file
fn save_chart(app: &mut App) {
    let overview = MonthlyOverview::generate(app.storage.data(), app.report_month);
    let chart = PieChart::from_totals(&overview.expenses_by_category);
    if chart.is_empty() {
        app.set_status(format!("No expenses to chart for {}", app.report_month.friendly()));
        return;
    }

    let path = app
        .storage
        .paths()
        .base_dir()
        .join(format!("expenses-{}.svg", app.report_month));
    match chart.save(&path) {
        Ok(()) => app.set_status(format!("Chart saved to {}", path.display())),
        Err(e) => app.report_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::config::settings::Settings;
    use crate::models::{Money, SavingsGoal};
    use crate::reports::TypeFilter;
    use crate::storage::{BudgetData, Storage};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn open(temp: &TempDir) -> Storage {
        Storage::open(BudgetPaths::with_base_dir(temp.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab, Tab::Budgets);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Savings);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Transactions);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_transaction_through_dialog() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        // Submitting empty shows the first validation message
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.transaction_form.error_message.as_deref(),
            Some("Please enter a description")
        );

        type_text(&mut app, "Groceries");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "45.50");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.transaction_form.category_input.value(), "Food");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.storage.transactions().len(), 1);
        assert_eq!(app.storage.transactions()[0].amount, Money::from_cents(4550));
        assert!(temp.path().join("budget_data.json").exists());
    }

    #[test]
    fn test_next_transaction_keeps_type_and_category() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        press(&mut app, KeyCode::Char('2'));

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Paycheck");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2000");
        press(&mut app, KeyCode::Tab);
        // Space on the type field switches to income
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Consulting");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.storage.transactions().len(), 1);

        // The next entry starts from the same type and category
        press(&mut app, KeyCode::Char('a'));
        let form = &app.transaction_form;
        assert_eq!(form.kind, crate::models::TransactionType::Income);
        assert_eq!(form.category_input.value(), "Consulting");
        assert_eq!(form.description_input.value(), "");
        assert_eq!(form.amount_input.value(), "");
    }

    #[test]
    fn test_duplicate_budget_shows_inline_error() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        press(&mut app, KeyCode::Char('3'));

        for _ in 0..2 {
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, "Food");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "400");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.active_dialog, ActiveDialog::AddBudget);
        assert_eq!(
            app.budget_form.error_message.as_deref(),
            Some("A budget for Food already exists")
        );
        assert_eq!(app.storage.budgets().len(), 1);
    }

    #[test]
    fn test_unsaved_budget_closes_dialog_with_warning() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let paths = BudgetPaths::with_base_dir(blocker);
        let mut storage = Storage::with_data(paths, BudgetData::default());
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "400");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.storage.budgets().len(), 1);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|status| status.starts_with("Changed but not saved")));
    }

    #[test]
    fn test_search_filter_and_sort_keys() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        press(&mut app, KeyCode::Char('2'));

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        type_text(&mut app, "rent");
        assert_eq!(app.query.search, "rent");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.query.type_filter, TypeFilter::Income);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.query.sort_order, crate::reports::SortOrder::Ascending);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.query.sort_field, SortField::Amount);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.query.search, "");
    }

    #[test]
    fn test_quick_contribution_and_delete_confirmation() {
        let temp = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        let mut data = BudgetData::default();
        data.savings_goals.push(SavingsGoal::new(
            "Trip",
            Money::from_cents(3000),
            Money::zero(),
            NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        ));
        let mut storage = Storage::with_data(paths, data);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        press(&mut app, KeyCode::Char('4'));

        // +10, then +25 caps at the 30.00 target
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.storage.savings_goals()[0].current_amount, Money::from_cents(3000));
        assert_eq!(app.status_message.as_deref(), Some("Trip reached its target!"));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.storage.savings_goals().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.storage.savings_goals().is_empty());
    }

    #[test]
    fn test_report_month_navigation() {
        let temp = TempDir::new().unwrap();
        let mut storage = open(&temp);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        let start = app.report_month;

        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.report_month, start.prev());
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.report_month.year, start.prev().year + 1);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.report_month, start);
    }

    #[test]
    fn test_save_chart_writes_svg() {
        let temp = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        let mut data = BudgetData::default();
        data.transactions.push(crate::models::Transaction::new(
            "Groceries",
            Money::from_cents(4500),
            "Food",
            crate::models::TransactionType::Expense,
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        ));
        let mut storage = Storage::with_data(paths, data);
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        app.switch_tab(Tab::Reports);

        app.report_month = MonthKey::new(2025, 2).unwrap();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(
            app.status_message.as_deref(),
            Some("No expenses to chart for February 2025")
        );

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('g'));
        assert!(temp.path().join("expenses-2025-03.svg").exists());
    }
}
