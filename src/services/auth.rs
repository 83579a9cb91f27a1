//! Account service
//!
//! Registration, login and logout. The logged-in user is remembered in the
//! session file so later commands can open that user's ledger.

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::crypto::{hash_password, verify_password};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{User, UserKey};
use crate::storage::Storage;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Service for account management
pub struct AuthService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Register a new account
    pub fn register(&self, name: &str, email: &str, password: &str) -> PocketbookResult<User> {
        let key = UserKey::from_email(email);
        if key.is_empty() {
            return Err(PocketbookError::Validation("Email is required.".into()));
        }

        if self.storage.users.get(&key)?.is_some() {
            return Err(PocketbookError::duplicate_user(key.as_str()));
        }

        let min = self.settings.min_password_length;
        if password.chars().count() < min {
            return Err(PocketbookError::Validation(format!(
                "Password must be at least {} characters.",
                min
            )));
        }

        let user = User::new(name.trim(), key, hash_password(password)?);
        self.storage.users.insert(user.clone())?;
        self.storage.users.save()?;

        // The stored hash stays out of the audit log
        self.storage.log_create(
            &user.email,
            EntityType::User,
            user.email.as_str(),
            Some(user.label()),
            &serde_json::json!({ "name": user.name, "email": user.email }),
        )?;

        Ok(user)
    }

    /// Verify credentials and remember the user as logged in
    pub fn login(&self, email: &str, password: &str) -> PocketbookResult<User> {
        let key = UserKey::from_email(email);
        let user = self
            .storage
            .users
            .get(&key)?
            .ok_or_else(|| PocketbookError::Auth(INVALID_CREDENTIALS.into()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(PocketbookError::Auth(INVALID_CREDENTIALS.into()));
        }

        self.storage.session.set_current_user(&user.email)?;
        Ok(user)
    }

    /// Forget the logged-in user
    pub fn logout(&self) -> PocketbookResult<()> {
        self.storage.session.clear()
    }

    /// The logged-in user, if the session still refers to a known account
    pub fn current_user(&self) -> PocketbookResult<Option<User>> {
        match self.storage.session.current_user()? {
            Some(key) => self.storage.users.get(&key),
            None => Ok(None),
        }
    }

    /// The logged-in user, or an `Auth` error
    pub fn require_user(&self) -> PocketbookResult<User> {
        self.current_user()?
            .ok_or_else(PocketbookError::not_logged_in)
    }
}
