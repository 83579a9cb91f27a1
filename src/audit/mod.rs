//! Audit logging for Pocketbook
//!
//! Every registration and ledger mutation is appended to `audit.log` as one
//! JSON object per line.
//!
//! - `AuditEntry`: timestamp, operation, entity, owning user and the entity's
//!   JSON before/after the change.
//! - `AuditLogger`: appends entries and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(&user, EntityType::Goal, "goal#1", Some("Bike".into()), &goal);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
