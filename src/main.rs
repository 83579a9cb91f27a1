use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_account_command, handle_budget_command, handle_export_command, handle_goal_command,
    handle_history_command, handle_report_command, handle_summary_command,
    handle_transaction_command, AccountCommands, BudgetCommands, ExportArgs, GoalCommands,
    ReportArgs, TransactionCommands,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::models::TransactionKind;
use pocketbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "Pocketbook records income and expenses, checks spending against a \
                  monthly budget plan, tracks savings goals and reports on any date range."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Account(AccountCommands),

    /// Income commands
    #[command(subcommand)]
    Income(TransactionCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(TransactionCommands),

    /// Budget plan commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show totals, balance and a short note
    #[command(alias = "dashboard")]
    Summary,

    /// Report on a date range (defaults to the current month)
    Report(ReportArgs),

    /// Export the ledger
    Export(ExportArgs),

    /// Show recent changes to your ledger
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => {
            handle_transaction_command(&storage, &settings, TransactionKind::Income, cmd)?
        }
        Some(Commands::Expense(cmd)) => {
            handle_transaction_command(&storage, &settings, TransactionKind::Expense, cmd)?
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Report(args)) => handle_report_command(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Min password length: {}", settings.min_password_length);
            println!("  Default report:      {:?}", settings.report_default_range);
        }
        None => {
            println!("Pocketbook - personal finance in your terminal");
            println!();
            println!("Run 'pocketbook register <name> <email>' to create an account.");
            println!("Run 'pocketbook --help' for usage information.");
        }
    }

    Ok(())
}
