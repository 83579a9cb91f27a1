//! Budget CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::BudgetCategory;
use crate::storage::Storage;

use super::{open_session, parse_amount, print_warnings};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Replace the budget plan; omitted limits are zero
    Set {
        /// Month the plan applies to (YYYY-MM)
        month: String,
        #[arg(long, allow_negative_numbers = true)]
        food: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        transport: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        rent: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        other: Option<String>,
    },
    /// Compare the plan month's spending against the plan
    Status {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    let mut session = open_session(storage)?;

    match cmd {
        BudgetCommands::Set {
            month,
            food,
            transport,
            rent,
            other,
        } => {
            let mut limits = Vec::new();
            for (category, value) in [
                (BudgetCategory::Food, food),
                (BudgetCategory::Transport, transport),
                (BudgetCategory::Rent, rent),
                (BudgetCategory::Other, other),
            ] {
                if let Some(value) = value {
                    limits.push((category, parse_amount(&value)?));
                }
            }

            let plan = session.set_budget_plan(&month, &limits)?;
            print_warnings(&mut session);
            println!("Budget plan saved for {}", plan.month.friendly());
            for (category, limit) in &plan.limits {
                println!(
                    "  {:<10} {:>12}",
                    category,
                    limit.format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        BudgetCommands::Status { output } => {
            let status = session.budget_status();

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    PocketbookError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                status.export_csv(BufWriter::new(file))?;
                println!("Budget status exported to: {}", path.display());
            } else {
                print!("{}", status.format_terminal(&settings.currency_symbol));
            }
        }
    }

    Ok(())
}
