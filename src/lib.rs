//! Pocketbook - terminal personal-finance tracker
//!
//! Users register and log in, record income and expenses, keep one monthly
//! budget plan with per-category limits, track savings goals, and report on
//! any date range.
//!
//! # Architecture
//!
//! - `config`: paths and settings
//! - `error`: custom error types
//! - `models`: transactions, budget plans, goals, the per-user ledger, users
//! - `storage`: JSON file storage and the [`storage::LedgerStore`] seam
//! - `services`: accounts and the per-user [`services::Session`]
//! - `reports`: budget status, goal progress, period reports, dashboard
//! - `audit`: JSON-lines audit log
//! - `crypto`: password hashing
//! - `display`, `export`, `cli`: presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::services::Session;
//! use pocketbook::storage::MemoryLedgerStore;
//!
//! let store = MemoryLedgerStore::new();
//! let mut session = Session::open(user, &store)?;
//! session.add_expense("Groceries", 95.0, "2024-05-10", "Food")?;
//! println!("{}", session.budget_status().message());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::PocketbookError;
