//! Display formatting for terminal output
//!
//! Helpers shared by the report renderers and the ledger listings.

pub mod report;
pub mod transaction;

pub use transaction::{format_transaction_list, format_transaction_row};
