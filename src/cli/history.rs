//! Audit history command

use crate::error::{PocketbookError, PocketbookResult};
use crate::storage::Storage;

/// Show the logged-in user's most recent audit entries
pub fn handle_history_command(storage: &Storage, count: usize) -> PocketbookResult<()> {
    let user = storage
        .session
        .current_user()?
        .ok_or_else(PocketbookError::not_logged_in)?;

    let entries = storage.audit().read_recent_for(&user, count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
