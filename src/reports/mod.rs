//! Reports module for Pocketbook
//!
//! Pure computations over a [`crate::models::LedgerState`] snapshot: budget
//! status, goal progress, date-ranged period reports and the dashboard.

pub mod budget_status;
pub mod dashboard;
pub mod goal_progress;
pub mod period;

pub use budget_status::{BudgetStatus, BudgetStatusReport, BudgetStatusRow, CategoryStatus};
pub use dashboard::{BalanceNote, Dashboard};
pub use goal_progress::{GoalProgress, GoalProgressReport};
pub use period::{ChartSlice, PeriodReport, ReportItem};
