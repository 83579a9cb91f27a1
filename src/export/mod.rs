//! Export module for Pocketbook
//!
//! - CSV: period report items and the full transaction ledger
//! - JSON: machine-readable dump of one user's ledger
//! - YAML: the same dump, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_report_csv, export_transactions_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
