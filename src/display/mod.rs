//! Display formatting for terminal output
//!
//! Plain-text renderings of the reports for CLI commands. Tables use
//! `tabled`; everything returns a `String` so handlers decide where it goes.

pub mod budget;
pub mod report;
pub mod savings;
pub mod transaction;

pub use budget::{format_budget_list, format_category_choices};
pub use report::{
    format_bar, format_dashboard, format_monthly_overview, format_percentage, separator, truncate,
};
pub use savings::format_savings_summary;
pub use transaction::format_register;
