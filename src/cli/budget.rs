//! Budget CLI commands

use clap::Subcommand;

use super::index_of;
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_category_choices};
use crate::error::BudgetResult;
use crate::models::category::budget_choices;
use crate::reports::BudgetSummary;
use crate::services::{BudgetInput, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending limit for a category
    Add {
        category: String,
        /// Limit amount (e.g. "400")
        limit: String,
    },

    /// Show spending against every budget
    List,

    /// Change a budget's limit
    Edit {
        /// Budget number as shown by `list`
        number: usize,
        limit: String,
    },

    /// Delete a budget
    Delete {
        number: usize,
    },

    /// Show categories that can still get a budget
    Categories,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    match cmd {
        BudgetCommands::Add { category, limit } => {
            let budget = BudgetService::new(storage).create(&BudgetInput::new(category, limit))?;
            println!("Added budget: {}", budget.describe(symbol));
        }

        BudgetCommands::List => {
            let summary = BudgetSummary::generate(storage.budgets(), storage.transactions());
            print!("{}", format_budget_list(&summary, symbol));
        }

        BudgetCommands::Edit { number, limit } => {
            let budget = BudgetService::new(storage).update_limit(index_of(number), &limit)?;
            println!("Updated budget: {}", budget.describe(symbol));
        }

        BudgetCommands::Delete { number } => {
            let budget = BudgetService::new(storage).delete(index_of(number))?;
            println!("Deleted budget: {}", budget.describe(symbol));
        }

        BudgetCommands::Categories => {
            let choices = budget_choices(storage.transactions(), storage.budgets());
            print!("{}", format_category_choices(&choices));
        }
    }

    Ok(())
}
