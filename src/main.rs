use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_budget_command, handle_dashboard_command, handle_export_command, handle_goal_command,
    handle_report_command, handle_transaction_command, BudgetCommands, ExportFormat, GoalCommands,
    ReportArgs, TransactionCommands,
};
use budget_planner::config::{
    paths::BudgetPaths,
    settings::{Settings, Tab},
};
use budget_planner::logging::{init_tracing, LogTarget};
use budget_planner::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Personal budget planner",
    long_about = "Track income and expenses, set category budgets, save towards \
                  goals and review monthly reports, from the command line or an \
                  interactive terminal UI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show totals, recent transactions, budgets and goals
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Monthly overview
    Report(ReportArgs),

    /// Export all data
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
        /// strftime date format, e.g. "%d/%m/%Y"
        #[arg(long)]
        date_format: Option<String>,
        /// Tab the TUI opens on
        #[arg(long)]
        default_tab: Option<Tab>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;

    // TUI logs go to a file, CLI logs to stderr
    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    if tui_mode {
        paths.ensure_directories()?;
        init_tracing(LogTarget::File(paths.log_file()));
    } else {
        init_tracing(LogTarget::Stderr);
    }

    // Settings, then the snapshot
    let mut settings = Settings::load_or_create(&paths)?;
    let mut storage = Storage::open(paths.clone())?;

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_planner::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&mut storage, &settings, cmd)?,
        Some(Commands::Report(args)) => handle_report_command(&storage, &settings, args)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::Config {
            currency,
            date_format,
            default_tab,
        }) => {
            // Apply and persist any changes, then show the result
            let changed = currency.is_some() || date_format.is_some() || default_tab.is_some();
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(format) = date_format {
                settings.set_date_format(&format)?;
            }
            if let Some(tab) = default_tab {
                settings.default_tab = tab;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Budget Planner Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default tab:     {}", settings.default_tab);
        }
    }

    Ok(())
}
