//! Storage layer for Pocketbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit log every mutation is recorded in.

pub mod file_io;
pub mod ledgers;
pub mod session;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use ledgers::{JsonLedgerStore, LedgerStore, MemoryLedgerStore};
pub use session::SessionRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::UserKey;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketbookPaths,
    pub users: UserRepository,
    pub ledgers: JsonLedgerStore,
    pub session: SessionRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            ledgers: JsonLedgerStore::new(paths.clone()),
            session: SessionRepository::new(paths.session_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Load all eagerly-loaded data from disk
    pub fn load_all(&mut self) -> Result<(), PocketbookError> {
        self.users.load()?;
        Ok(())
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Log a create operation to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        user: &UserKey,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketbookError> {
        let entry = AuditEntry::create(user, entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().join("pb"));
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("pb").join("data").exists());
        assert_eq!(storage.users.count().unwrap(), 0);
        assert_eq!(storage.session.current_user().unwrap(), None);
    }

    #[test]
    fn test_log_create_appends_to_audit_log() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let user = UserKey::from_email("ana@example.com");
        storage
            .log_create(&user, EntityType::User, "ana@example.com", None, &"ana")
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
