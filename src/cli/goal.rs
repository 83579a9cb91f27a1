//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::PocketbookResult;
use crate::storage::Storage;

use super::{open_session, parse_amount, print_warnings};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(allow_negative_numbers = true)]
        target: String,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// Show every goal with its share of the current balance
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> PocketbookResult<()> {
    let mut session = open_session(storage)?;

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let goal = session.add_goal(&name, target, deadline.as_deref())?;
            print_warnings(&mut session);
            println!(
                "Added goal: {} (target {})",
                goal.name,
                goal.target.format_with_symbol(&settings.currency_symbol)
            );
        }

        GoalCommands::List => {
            print!(
                "{}",
                session
                    .goal_progress()
                    .format_terminal(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
