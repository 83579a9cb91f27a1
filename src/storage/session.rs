//! Remembers which user is logged in between CLI invocations

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PocketbookError;
use crate::models::UserKey;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    user: Option<UserKey>,
    #[serde(default)]
    logged_in_at: Option<DateTime<Utc>>,
}

/// The session.json file
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Result<Option<UserKey>, PocketbookError> {
        let data: SessionData = read_json(&self.path)?;
        Ok(data.user.filter(|u| !u.is_empty()))
    }

    /// Record a successful login
    pub fn set_current_user(&self, user: &UserKey) -> Result<(), PocketbookError> {
        let data = SessionData {
            user: Some(user.clone()),
            logged_in_at: Some(Utc::now()),
        };
        write_json_atomic(&self.path, &data)
    }

    /// Forget the logged-in user
    pub fn clear(&self) -> Result<(), PocketbookError> {
        remove_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_login_logout_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SessionRepository::new(temp_dir.path().join("session.json"));

        assert_eq!(repo.current_user().unwrap(), None);

        let ana = UserKey::from_email("ana@example.com");
        repo.set_current_user(&ana).unwrap();
        assert_eq!(repo.current_user().unwrap(), Some(ana));

        repo.clear().unwrap();
        assert_eq!(repo.current_user().unwrap(), None);
    }
}
