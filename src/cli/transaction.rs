//! Income and expense CLI commands
//!
//! The same subcommands serve both sides of the ledger; the caller says
//! which one.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::PocketbookResult;
use crate::models::TransactionKind;
use crate::storage::Storage;

use super::{open_session, parse_amount, print_warnings, today};

/// Income/expense subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new entry
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category (Food, Transport, Rent, Other, or any label)
        #[arg(short, long, default_value = "Other")]
        category: String,
    },
    /// List all entries in the order they were recorded
    List,
}

/// Handle an income or expense command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionKind,
    cmd: TransactionCommands,
) -> PocketbookResult<()> {
    let mut session = open_session(storage)?;

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            date,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.unwrap_or_else(|| today().format("%Y-%m-%d").to_string());

            let txn = match kind {
                TransactionKind::Income => {
                    session.add_income(&description, amount, &date, &category)?
                }
                TransactionKind::Expense => {
                    session.add_expense(&description, amount, &date, &category)?
                }
            };
            print_warnings(&mut session);

            println!(
                "Added {}: {} {} on {} ({})",
                kind.noun(),
                txn.description,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.date,
                txn.category
            );

            let totals = session.totals();
            println!(
                "Balance: {}",
                totals.balance.format_with_symbol(&settings.currency_symbol)
            );
        }

        TransactionCommands::List => {
            print!(
                "{}",
                format_transaction_list(
                    kind,
                    session.state().entries(kind),
                    &settings.currency_symbol
                )
            );
        }
    }

    Ok(())
}
