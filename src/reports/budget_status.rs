//! Budget Status Report
//!
//! Compares the active plan's per-category limits against what was spent in
//! the plan's month.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Amount, BudgetCategory, BudgetMonth, BudgetPlan, Transaction};

/// Share of a limit at which a category is flagged as near it
pub const NEAR_LIMIT_RATIO: f64 = 0.9;

pub const NO_PLAN_MESSAGE: &str = "No budget plan defined yet.";
pub const WARNING_MESSAGE: &str = "Warning: some categories are near or above the limit.";
pub const WITHIN_LIMITS_MESSAGE: &str = "You are within your budget limits.";

/// Status of a single category against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryStatus {
    /// No limit set (limit is zero)
    Unset,
    Ok,
    Near,
    Over,
}

impl CategoryStatus {
    /// Classify spending against a limit
    pub fn classify(spent: Amount, limit: Amount) -> Self {
        if limit.value() <= 0.0 {
            return Self::Unset;
        }
        let ratio = spent.value() / limit.value();
        if ratio >= 1.0 {
            Self::Over
        } else if ratio >= NEAR_LIMIT_RATIO {
            Self::Near
        } else {
            Self::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "-",
            Self::Ok => "OK",
            Self::Near => "NEAR limit",
            Self::Over => "OVER limit",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Near | Self::Over)
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One row of the status table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatusRow {
    pub category: BudgetCategory,
    pub spent: Amount,
    pub limit: Amount,
    pub status: CategoryStatus,
}

/// Evaluation of an existing plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatusReport {
    pub month: BudgetMonth,
    /// Always one row per category, in `BudgetCategory::ALL` order
    pub rows: Vec<BudgetStatusRow>,
    pub any_warning: bool,
}

/// Result of evaluating the budget
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetStatus {
    NoPlan,
    Evaluated(BudgetStatusReport),
}

impl BudgetStatus {
    /// Evaluate a plan against the expense ledger
    pub fn evaluate(plan: Option<&BudgetPlan>, expenses: &[Transaction]) -> Self {
        let Some(plan) = plan else {
            return Self::NoPlan;
        };

        let mut spent: BTreeMap<BudgetCategory, Amount> = BTreeMap::new();
        for expense in expenses.iter().filter(|e| plan.month.contains(e.date)) {
            if let Some(category) = BudgetCategory::from_name(&expense.category) {
                *spent.entry(category).or_default() += expense.amount;
            }
        }

        let rows: Vec<BudgetStatusRow> = BudgetCategory::ALL
            .into_iter()
            .map(|category| {
                let spent = spent.get(&category).copied().unwrap_or_default();
                let limit = plan.limit_for(category);
                BudgetStatusRow {
                    category,
                    spent,
                    limit,
                    status: CategoryStatus::classify(spent, limit),
                }
            })
            .collect();

        let any_warning = rows.iter().any(|r| r.status.is_warning());

        Self::Evaluated(BudgetStatusReport {
            month: plan.month,
            rows,
            any_warning,
        })
    }

    /// The summary line shown under the table
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoPlan => NO_PLAN_MESSAGE,
            Self::Evaluated(report) if report.any_warning => WARNING_MESSAGE,
            Self::Evaluated(_) => WITHIN_LIMITS_MESSAGE,
        }
    }

    pub fn report(&self) -> Option<&BudgetStatusReport> {
        match self {
            Self::NoPlan => None,
            Self::Evaluated(report) => Some(report),
        }
    }

    /// Format the status for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let Some(report) = self.report() else {
            return format!("{}\n", NO_PLAN_MESSAGE);
        };

        let mut output = String::new();
        output.push_str(&format!("Budget Status - {}\n", report.month.friendly()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<14} {:>14} {:>14} {:>14}\n",
            "Category", "Spent", "Limit", "Status"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &report.rows {
            output.push_str(&format!(
                "{:<14} {:>14} {:>14} {:>14}\n",
                row.category,
                row.spent.format_with_symbol(currency),
                row.limit.format_with_symbol(currency),
                row.status
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(self.message());
        output.push('\n');
        output
    }

    /// Export the status rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> PocketbookResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Category", "Spent", "Limit", "Status"])
            .map_err(|e| PocketbookError::Export(e.to_string()))?;

        if let Some(report) = self.report() {
            for row in &report.rows {
                csv.write_record([
                    report.month.to_string(),
                    row.category.to_string(),
                    format!("{:.2}", row.spent.value()),
                    format!("{:.2}", row.limit.value()),
                    row.status.to_string(),
                ])
                .map_err(|e| PocketbookError::Export(e.to_string()))?;
            }
        }

        csv.flush()
            .map_err(|e| PocketbookError::Export(e.to_string()))?;
        Ok(())
    }
}
