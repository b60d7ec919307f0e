//! Dashboard CLI command

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::BudgetResult;
use crate::reports::DashboardSummary;
use crate::storage::Storage;

pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let summary = DashboardSummary::generate(storage.data());
    print!("{}", format_dashboard(&summary, &settings.currency_symbol));
    Ok(())
}
