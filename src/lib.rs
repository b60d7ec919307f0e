//! Budget Planner - personal budget tracking for the terminal
//!
//! Record income and expense transactions, set per-category budgets, track
//! savings goals and review monthly reports. All records live in memory for
//! the session and are mirrored to a single JSON snapshot after every change.
//!
//! # Architecture
//!
//! - `config`: data directory and user settings
//! - `error`: custom error types
//! - `models`: transactions, budgets, savings goals, money and months
//! - `storage`: the persisted snapshot with atomic writes
//! - `services`: form validation and mutations
//! - `reports`: dashboard, register, monthly overview, pie chart, projections
//! - `display` / `export`: text rendering and data export
//! - `cli` / `tui`: the two front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::BudgetPaths;
//! use budget_planner::reports::DashboardSummary;
//! use budget_planner::storage::Storage;
//!
//! let storage = Storage::open(BudgetPaths::new()?)?;
//! let summary = DashboardSummary::generate(storage.data());
//! println!("balance: {}", summary.totals.balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
