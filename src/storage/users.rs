//! User repository for JSON storage
//!
//! Manages loading and saving registered accounts to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{User, UserKey};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserKey, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for user in file_data.users {
            data.insert(user.email.clone(), user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let data = self.data.read().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.email.cmp(&b.email)));

        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by key
    pub fn get(&self, key: &UserKey) -> Result<Option<User>, PocketbookError> {
        let data = self.data.read().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    /// Insert a new user; the email must not be registered yet
    pub fn insert(&self, user: User) -> Result<(), PocketbookError> {
        let mut data = self.data.write().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.contains_key(&user.email) {
            return Err(PocketbookError::duplicate_user(user.email.as_str()));
        }
        data.insert(user.email.clone(), user);
        Ok(())
    }

    /// Number of registered users
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let data = self.data.read().map_err(|e| {
            PocketbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(email: &str) -> User {
        User::new("Test", UserKey::from_email(email), "$argon2id$fake".into())
    }

    #[test]
    fn test_insert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("users.json"));
        repo.load().unwrap();

        repo.insert(user("ana@example.com")).unwrap();
        let found = repo.get(&UserKey::from_email("ANA@example.com")).unwrap();
        assert!(found.is_some());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("users.json"));

        repo.insert(user("ana@example.com")).unwrap();
        let err = repo.insert(user("ana@example.com")).unwrap_err();
        assert!(matches!(err, PocketbookError::Duplicate { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        let repo = UserRepository::new(path.clone());
        repo.insert(user("ana@example.com")).unwrap();
        repo.insert(user("bo@example.com")).unwrap();
        repo.save().unwrap();

        let reloaded = UserRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
        assert!(reloaded
            .get(&UserKey::from_email("bo@example.com"))
            .unwrap()
            .is_some());
    }
}
