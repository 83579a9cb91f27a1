//! Core data models for Pocketbook
//!
//! This module contains the data structures of the tracker: transactions,
//! budget plans, savings goals, the per-user ledger and user accounts.

pub mod budget;
pub mod goal;
pub mod ledger;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use budget::{BudgetCategory, BudgetPlan, BudgetValidationError};
pub use goal::{Goal, GoalValidationError};
pub use ledger::{LedgerState, LedgerTotals};
pub use money::{Amount, AmountParseError};
pub use period::{BudgetMonth, PeriodParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
pub use user::{User, UserKey};
