//! JSON Export functionality
//!
//! Dumps one user's ledger with a schema version and summary metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{LedgerState, UserKey};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Owner of the ledger
    pub user: UserKey,

    /// The ledger exactly as stored
    pub ledger: LedgerState,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub goal_count: usize,
    pub balance: f64,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot a user's ledger
    pub fn from_state(user: &UserKey, state: &LedgerState) -> Self {
        let dates = || state.incomes.iter().chain(&state.expenses).map(|t| t.date);

        let metadata = ExportMetadata {
            income_count: state.incomes.len(),
            expense_count: state.expenses.len(),
            goal_count: state.goals.len(),
            balance: state.totals().balance.value(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: user.clone(),
            ledger: state.clone(),
            metadata,
        }
    }
}

/// Export a user's ledger to JSON
pub fn export_full_json<W: Write>(
    user: &UserKey,
    state: &LedgerState,
    writer: &mut W,
    pretty: bool,
) -> PocketbookResult<()> {
    let export = FullExport::from_state(user, state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};

    #[test]
    fn test_json_export() {
        let user = UserKey::from_email("ana@example.com");
        let mut state = LedgerState::new();
        state.record(
            TransactionKind::Expense,
            Transaction::from_input("Bus", 2.5, "2024-05-09", "Transport").unwrap(),
        );
        state.record(
            TransactionKind::Income,
            Transaction::from_input("Salary", 100.0, "2024-05-01", "Job").unwrap(),
        );

        let mut out = Vec::new();
        export_full_json(&user, &state, &mut out, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["user"], "ana@example.com");
        assert_eq!(value["ledger"]["expenses"][0]["description"], "Bus");
        assert_eq!(value["metadata"]["earliest_transaction"], "2024-05-01");
        assert_eq!(value["metadata"]["latest_transaction"], "2024-05-09");
        assert_eq!(value["metadata"]["balance"], 97.5);

        let back: FullExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(back.ledger, state);
    }
}
