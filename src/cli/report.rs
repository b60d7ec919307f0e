//! Monthly report CLI commands

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::format_monthly_overview;
use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthKey;
use crate::reports::monthly::months_with_activity;
use crate::reports::{MonthlyOverview, PieChart};
use crate::storage::Storage;

/// `budget report` arguments
#[derive(Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: Option<ReportCommands>,

    /// Month to report on (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Also write the expense pie chart as SVG
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// List the months that have transactions
    Months,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> BudgetResult<()> {
    if let Some(ReportCommands::Months) = args.command {
        let months = months_with_activity(storage.transactions());
        if months.is_empty() {
            println!("No transactions yet.");
        }
        for month in months {
            println!("{}  {}", month, month.friendly());
        }
        return Ok(());
    }

    let month = match args.month.as_deref() {
        Some(text) => MonthKey::parse(text).map_err(|e| BudgetError::validation(e.to_string()))?,
        None => MonthKey::current(),
    };

    let overview = MonthlyOverview::generate(storage.data(), month);
    print!("{}", format_monthly_overview(&overview, &settings.currency_symbol));

    if let Some(path) = args.chart {
        let chart = PieChart::from_totals(&overview.expenses_by_category);
        if chart.is_empty() {
            println!("No expenses to chart for {}", month.friendly());
        } else {
            chart.save(&path)?;
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}
