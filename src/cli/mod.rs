//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod budget;
pub mod export;
pub mod goal;
pub mod history;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use history::handle_history_command;
pub use report::{handle_report_command, handle_summary_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Amount;
use crate::services::Session;
use crate::storage::{JsonLedgerStore, LedgerStore, Storage};

/// Open the logged-in user's ledger, with auditing enabled
pub fn open_session(storage: &Storage) -> PocketbookResult<Session<'_, JsonLedgerStore>> {
    let user = storage
        .session
        .current_user()?
        .ok_or_else(PocketbookError::not_logged_in)?;

    if storage.users.get(&user)?.is_none() {
        return Err(PocketbookError::user_not_found(user.as_str()));
    }

    Ok(Session::open(user, &storage.ledgers)?.with_audit(storage.audit()))
}

/// Print warnings a session collected while saving changes
pub fn print_warnings<S: LedgerStore + ?Sized>(session: &mut Session<'_, S>) {
    for warning in session.take_warnings() {
        eprintln!("Warning: {}", warning);
    }
}

/// Parse a user-typed amount such as "12.50" or "$12.50"
pub fn parse_amount(input: &str) -> PocketbookResult<f64> {
    Amount::parse(input)
        .map(|a| a.value())
        .map_err(|e| PocketbookError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(input: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PocketbookError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("$3").unwrap(), 3.0);
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-05-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
        );
        assert!(parse_date("15/05/2024").unwrap_err().is_validation());
    }
}
