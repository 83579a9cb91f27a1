//! Ledger persistence
//!
//! Each user's [`LedgerState`] is one opaque JSON blob keyed by their
//! [`UserKey`]. [`LedgerStore`] is the seam the session talks to; the JSON
//! file store backs the CLI and the in-memory store backs embedding and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::{LedgerState, UserKey};

use super::file_io::{read_json, write_json_atomic};

/// Load/save access to per-user ledgers
pub trait LedgerStore {
    /// Load a user's ledger, or an empty one if nothing is stored yet
    fn load(&self, user: &UserKey) -> Result<LedgerState, PocketbookError>;

    /// Write a user's ledger back; failures are [`PocketbookError::Persistence`]
    fn save(&self, user: &UserKey, state: &LedgerState) -> Result<(), PocketbookError>;
}

/// Ledgers stored as `data/ledger_<key>.json`
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    paths: PocketbookPaths,
}

impl JsonLedgerStore {
    pub fn new(paths: PocketbookPaths) -> Self {
        Self { paths }
    }

    /// Whether anything has been stored for this user
    pub fn exists(&self, user: &UserKey) -> bool {
        self.paths.ledger_file(user).exists()
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self, user: &UserKey) -> Result<LedgerState, PocketbookError> {
        read_json(self.paths.ledger_file(user))
    }

    fn save(&self, user: &UserKey, state: &LedgerState) -> Result<(), PocketbookError> {
        write_json_atomic(self.paths.ledger_file(user), state)
    }
}

/// Ledgers kept in process memory
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    data: RwLock<HashMap<UserKey, LedgerState>>,
    fail_writes: AtomicBool,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `save` fail (simulates a full or read-only disk)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// What is currently stored for a user, if anything
    pub fn stored(&self, user: &UserKey) -> Result<Option<LedgerState>, PocketbookError> {
        let data = self.data.read().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(user).cloned())
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self, user: &UserKey) -> Result<LedgerState, PocketbookError> {
        Ok(self.stored(user)?.unwrap_or_default())
    }

    fn save(&self, user: &UserKey, state: &LedgerState) -> Result<(), PocketbookError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PocketbookError::Persistence(format!(
                "Could not save ledger for {}: storage rejected the write",
                user
            )));
        }

        let mut data = self.data.write().map_err(|e| {
            PocketbookError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(user.clone(), state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Transaction, TransactionKind};
    use tempfile::TempDir;

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::new();
        state.record(
            TransactionKind::Income,
            Transaction::from_input("Salary", 1000.0, "2024-05-01", "Job").unwrap(),
        );
        state.add_goal(Goal::from_input("Bike", 300.0, None).unwrap());
        state
    }

    #[test]
    fn test_json_store_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(PocketbookPaths::with_base_dir(
            temp_dir.path().to_path_buf(),
        ));

        let user = UserKey::from_email("new@example.com");
        assert!(!store.exists(&user));
        assert_eq!(store.load(&user).unwrap(), LedgerState::new());
    }

    #[test]
    fn test_json_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(PocketbookPaths::with_base_dir(
            temp_dir.path().to_path_buf(),
        ));

        let user = UserKey::from_email("ana@example.com");
        let state = sample_state();
        store.save(&user, &state).unwrap();

        assert!(store.exists(&user));
        assert_eq!(store.load(&user).unwrap(), state);
    }

    #[test]
    fn test_json_store_keeps_users_apart() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(PocketbookPaths::with_base_dir(
            temp_dir.path().to_path_buf(),
        ));

        let ana = UserKey::from_email("ana@example.com");
        let bo = UserKey::from_email("bo@example.com");
        store.save(&ana, &sample_state()).unwrap();

        assert_eq!(store.load(&bo).unwrap(), LedgerState::new());
    }

    #[test]
    fn test_json_store_write_failure_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the data directory should be
        let base = temp_dir.path().to_path_buf();
        std::fs::write(base.join("data"), "blocker").unwrap();
        let store = JsonLedgerStore::new(PocketbookPaths::with_base_dir(base));

        let err = store
            .save(&UserKey::from_email("ana@example.com"), &sample_state())
            .unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_memory_store_fail_writes() {
        let store = MemoryLedgerStore::new();
        let user = UserKey::from_email("ana@example.com");

        store.save(&user, &sample_state()).unwrap();
        store.set_fail_writes(true);
        assert!(store.save(&user, &LedgerState::new()).unwrap_err().is_persistence());

        // The earlier blob is untouched
        assert_eq!(store.stored(&user).unwrap(), Some(sample_state()));
    }
}
