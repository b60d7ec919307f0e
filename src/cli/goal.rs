//! Savings goal CLI commands

use clap::Subcommand;

use super::index_of;
use crate::config::settings::Settings;
use crate::display::format_savings_summary;
use crate::error::BudgetResult;
use crate::reports::SavingsSummary;
use crate::services::{today, Contribution, GoalInput, SavingsService};
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        current: String,
        /// Target date (YYYY-MM-DD)
        date: String,
    },

    /// Show goals by deadline with the monthly saving needed
    List,

    /// Edit a goal
    Edit {
        /// Goal number as shown by `list`
        number: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a goal
    Delete {
        number: usize,
    },

    /// Add money to a goal
    Contribute {
        number: usize,
        /// Amount, or "remaining" to complete the goal
        amount: String,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    match cmd {
        GoalCommands::Add {
            name,
            target,
            current,
            date,
        } => {
            let input = GoalInput {
                name,
                target_amount: target,
                current_amount: current,
                target_date: date,
            };
            let goal = SavingsService::new(storage).create(&input)?;
            println!("Added savings goal: {}", goal.describe(symbol));
        }

        GoalCommands::List => {
            let summary = SavingsSummary::generate(storage.data(), today());
            print!("{}", format_savings_summary(&summary, symbol));
        }

        GoalCommands::Edit {
            number,
            name,
            target,
            current,
            date,
        } => {
            let index = index_of(number);
            let mut service = SavingsService::new(storage);
            let mut input = GoalInput::from_goal(service.get(index)?);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(target) = target {
                input.target_amount = target;
            }
            if let Some(current) = current {
                input.current_amount = current;
            }
            if let Some(date) = date {
                input.target_date = date;
            }

            let goal = service.update(index, &input)?;
            println!("Updated savings goal: {}", goal.describe(symbol));
        }

        GoalCommands::Delete { number } => {
            let goal = SavingsService::new(storage).delete(index_of(number))?;
            println!("Deleted savings goal: {}", goal.describe(symbol));
        }

        GoalCommands::Contribute { number, amount } => {
            let contribution = Contribution::parse(&amount)?;
            let goal = SavingsService::new(storage).contribute(index_of(number), contribution)?;
            println!("Contributed to {}", goal.describe(symbol));
            if goal.is_complete() {
                println!("Goal reached!");
            }
        }
    }

    Ok(())
}
