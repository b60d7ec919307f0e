//! Transaction CLI commands

use clap::{Subcommand, ValueEnum};

use super::{index_of, FilterArg, KindArg};
use crate::config::settings::Settings;
use crate::display::{format_category_choices, format_register};
use crate::error::BudgetResult;
use crate::models::category::transaction_choices;
use crate::reports::{SortField, SortOrder, TransactionQuery};
use crate::services::{today, TransactionInput, TransactionService};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Amount,
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        description: String,
        /// Amount (e.g. "12.50")
        amount: String,
        #[arg(short, long)]
        category: String,
        /// Defaults to expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Match against description or category
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short = 't', long = "type", value_enum, default_value = "all")]
        kind: FilterArg,
        #[arg(long, value_enum, default_value = "date")]
        sort: SortArg,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Edit a transaction; its type cannot change
    Edit {
        /// Transaction number as shown by `list`
        number: usize,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        number: usize,
    },

    /// Show the categories offered for a transaction type
    Categories {
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
            date,
        } => {
            let input = TransactionInput {
                description,
                amount,
                category,
                kind: kind.into(),
                date: date.unwrap_or_else(|| today().format("%Y-%m-%d").to_string()),
            };
            let txn = TransactionService::new(storage).create(&input)?;
            println!(
                "Added transaction #{}: {}",
                storage.transactions().len(),
                txn.describe(symbol)
            );
        }

        TransactionCommands::List {
            search,
            kind,
            sort,
            asc,
            page,
        } => {
            let query = TransactionQuery {
                search: search.unwrap_or_default(),
                type_filter: kind.into(),
                sort_field: match sort {
                    SortArg::Date => SortField::Date,
                    SortArg::Amount => SortField::Amount,
                },
                sort_order: if asc {
                    SortOrder::Ascending
                } else {
                    SortOrder::Descending
                },
                page,
            };
            print!("{}", format_register(&query.run(storage.transactions()), symbol));
        }

        TransactionCommands::Edit {
            number,
            description,
            amount,
            category,
            date,
        } => {
            let index = index_of(number);
            let mut service = TransactionService::new(storage);
            let mut input = TransactionInput::from_transaction(service.get(index)?);
            if let Some(description) = description {
                input.description = description;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(category) = category {
                input.category = category;
            }
            if let Some(date) = date {
                input.date = date;
            }

            let txn = service.update(index, &input)?;
            println!("Updated transaction #{}: {}", number, txn.describe(symbol));
        }

        TransactionCommands::Delete { number } => {
            let txn = TransactionService::new(storage).delete(index_of(number))?;
            println!("Deleted transaction: {}", txn.describe(symbol));
        }

        TransactionCommands::Categories { kind } => {
            print!(
                "{}",
                format_category_choices(&transaction_choices(kind.into(), storage.transactions()))
            );
        }
    }

    Ok(())
}
