//! Service layer for Pocketbook
//!
//! Accounts live in [`AuthService`]; everything a logged-in user does to
//! their ledger goes through a [`Session`].

pub mod auth;
pub mod session;

pub use auth::AuthService;
pub use session::Session;
