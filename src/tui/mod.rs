//! Terminal User Interface module
//!
//! A ratatui front end whose tabs mirror the CLI: dashboard, transactions,
//! budgets, savings goals and the monthly report, with modal dialogs for
//! data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
