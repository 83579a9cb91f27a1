//! YAML Export functionality

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::json::FullExport;
use crate::models::{LedgerState, UserKey};

/// Export a user's ledger to YAML with a short comment header
pub fn export_full_yaml<W: Write>(
    user: &UserKey,
    state: &LedgerState,
    writer: &mut W,
) -> PocketbookResult<()> {
    let export = FullExport::from_state(user, state);
    let err = |e: std::io::Error| PocketbookError::Export(e.to_string());

    writeln!(writer, "# Pocketbook Ledger Export").map_err(err)?;
    writeln!(writer, "# User: {}", export.user).map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    #[test]
    fn test_yaml_export() {
        let user = UserKey::from_email("ana@example.com");
        let mut state = LedgerState::new();
        state.add_goal(Goal::from_input("Bike", 300.0, Some("2024-09-01")).unwrap());

        let mut out = Vec::new();
        export_full_yaml(&user, &state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Pocketbook Ledger Export\n# User: ana@example.com\n"));
        assert!(text.contains("name: Bike"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.ledger, state);
    }
}
