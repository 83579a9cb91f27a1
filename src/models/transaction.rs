//! Transaction model
//!
//! Income and expense records. A transaction is immutable once recorded; the
//! ledger only ever appends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::BudgetCategory;
use super::money::Amount;

/// Which side of the ledger a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase noun used in messages ("income", "expense")
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// What the money was for
    #[serde(alias = "desc")]
    pub description: String,

    /// Always strictly positive; the kind decides the sign
    pub amount: Amount,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-form category label (budgeting only tracks the fixed set)
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Build a transaction from raw form input.
    ///
    /// The description is trimmed; the date must be `YYYY-MM-DD`. A category
    /// that names a budget category in any case is stored under its exact name.
    pub fn from_input(
        description: &str,
        amount: f64,
        date: &str,
        category: &str,
    ) -> Result<Self, TransactionValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        let date = date.trim();
        if date.is_empty() {
            return Err(TransactionValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| TransactionValidationError::InvalidDate(date.to_string()))?;

        let category = category.trim();
        let category = BudgetCategory::from_label(category)
            .map(|c| c.name())
            .unwrap_or(category);

        let txn = Self::new(description, Amount::new(amount), date, category);
        txn.validate()?;
        Ok(txn)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount.value()));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    EmptyDescription,
    MissingDate,
    InvalidDate(String),
    NonPositiveAmount(f64),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date '{}'. Use YYYY-MM-DD", date)
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let txn = Transaction::from_input("  Groceries ", 42.5, "2024-05-10", "Food").unwrap();
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, Amount::new(42.5));
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_budget_category_labels_are_normalized() {
        let txn = Transaction::from_input("Lunch", 8.0, "2024-05-10", " food ").unwrap();
        assert_eq!(txn.category, "Food");

        let txn = Transaction::from_input("Paycheck", 8.0, "2024-05-10", "salary").unwrap();
        assert_eq!(txn.category, "salary");
    }

    #[test]
    fn test_rejects_empty_description() {
        assert_eq!(
            Transaction::from_input("   ", 10.0, "2024-05-10", "Food"),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_rejects_missing_or_bad_date() {
        assert_eq!(
            Transaction::from_input("Bus", 2.0, "", "Transport"),
            Err(TransactionValidationError::MissingDate)
        );
        assert!(matches!(
            Transaction::from_input("Bus", 2.0, "2024-13-01", "Transport"),
            Err(TransactionValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(Transaction::from_input("Bus", amount, "2024-05-10", "Transport").is_err());
        }
    }

    #[test]
    fn test_accepts_legacy_desc_field() {
        let json = r#"{"desc":"Salary","amount":1000,"date":"2024-05-01","category":"Job"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.description, "Salary");
        assert_eq!(txn.amount.value(), 1000.0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.noun(), "expense");
    }
}
