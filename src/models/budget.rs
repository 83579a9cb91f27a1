//! Budget plan model
//!
//! A single active plan holds per-category spending limits for one month.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::money::Amount;
use super::period::BudgetMonth;

/// The closed set of categories a budget plan can limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetCategory {
    Food,
    Transport,
    Rent,
    Other,
}

impl BudgetCategory {
    /// All categories in display order
    pub const ALL: [BudgetCategory; 4] = [Self::Food, Self::Transport, Self::Rent, Self::Other];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Rent => "Rent",
            Self::Other => "Other",
        }
    }

    /// Exact match on the category name, as stored on a transaction
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Match user input loosely (trimmed, case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            format!(
                "Unknown budget category '{}'. Expected one of: Food, Transport, Rent, Other",
                s
            )
        })
    }
}

/// The active monthly budget plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// Month the limits apply to
    pub month: BudgetMonth,

    /// Spending limit per category; missing entries mean "no limit set"
    #[serde(default)]
    pub limits: BTreeMap<BudgetCategory, Amount>,
}

impl BudgetPlan {
    /// Create a plan with no limits
    pub fn new(month: BudgetMonth) -> Self {
        Self {
            month,
            limits: BTreeMap::new(),
        }
    }

    /// Builder-style limit setter
    pub fn with_limit(mut self, category: BudgetCategory, limit: Amount) -> Self {
        self.limits.insert(category, limit);
        self
    }

    /// The limit for a category, zero when unset
    pub fn limit_for(&self, category: BudgetCategory) -> Amount {
        self.limits.get(&category).copied().unwrap_or_default()
    }

    /// Validate the plan
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        for (category, limit) in &self.limits {
            if !limit.is_finite() || limit.is_negative() {
                return Err(BudgetValidationError::InvalidLimit {
                    category: *category,
                    limit: limit.value(),
                });
            }
        }
        Ok(())
    }
}

/// Validation errors for budget plans
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    InvalidLimit { category: BudgetCategory, limit: f64 },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimit { category, limit } => write!(
                f,
                "Limit for {} must be a non-negative number, got {}",
                category, limit
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> BudgetMonth {
        BudgetMonth::parse("2024-05").unwrap()
    }

    #[test]
    fn test_limit_defaults_to_zero() {
        let plan = BudgetPlan::new(may()).with_limit(BudgetCategory::Food, Amount::new(100.0));
        assert_eq!(plan.limit_for(BudgetCategory::Food), Amount::new(100.0));
        assert_eq!(plan.limit_for(BudgetCategory::Rent), Amount::zero());
    }

    #[test]
    fn test_validate_rejects_negative_limits() {
        let plan = BudgetPlan::new(may()).with_limit(BudgetCategory::Rent, Amount::new(-1.0));
        assert!(plan.validate().is_err());

        let plan = BudgetPlan::new(may()).with_limit(BudgetCategory::Rent, Amount::zero());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BudgetCategory::from_label("food"), Some(BudgetCategory::Food));
        assert_eq!(" Rent ".parse::<BudgetCategory>(), Ok(BudgetCategory::Rent));
        assert_eq!(BudgetCategory::from_label("Salary"), None);

        assert_eq!(BudgetCategory::from_name("Food"), Some(BudgetCategory::Food));
        assert_eq!(BudgetCategory::from_name("food"), None);
        assert_eq!(BudgetCategory::from_name(" Rent "), None);
    }

    #[test]
    fn test_serialized_shape() {
        let plan = BudgetPlan::new(may())
            .with_limit(BudgetCategory::Food, Amount::new(100.0))
            .with_limit(BudgetCategory::Other, Amount::new(20.0));

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["month"], "2024-05");
        assert_eq!(json["limits"]["Food"], 100.0);
        assert_eq!(json["limits"]["Other"], 20.0);

        let back: BudgetPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
