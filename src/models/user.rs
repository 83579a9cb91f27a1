//! User account model
//!
//! A registered user is identified by their normalized email address, which
//! also keys their ledger in storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a user: the trimmed, lower-cased email
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    /// Normalize an email address into a key
    pub fn from_email(email: &str) -> Self {
        Self(email.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Normalized email, doubles as the user key
    pub email: UserKey,

    /// Argon2id PHC string; the plain password is never stored
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: UserKey, password_hash: String) -> Self {
        Self {
            name: name.into(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// "Name (email)" label shown after login
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.email.to_string()
        } else {
            format!("{} ({})", self.name, self.email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalization() {
        let key = UserKey::from_email("  Ana@Example.COM ");
        assert_eq!(key.as_str(), "ana@example.com");
        assert_eq!(key, UserKey::from_email("ana@example.com"));
    }

    #[test]
    fn test_label() {
        let user = User::new("Ana", UserKey::from_email("ana@example.com"), "hash".into());
        assert_eq!(user.label(), "Ana (ana@example.com)");

        let anonymous = User::new("", UserKey::from_email("x@y.z"), "hash".into());
        assert_eq!(anonymous.label(), "x@y.z");
    }
}
