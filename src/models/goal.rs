//! Savings goal model
//!
//! Goals store only a name, a target and an optional deadline. How much has
//! been "saved" toward a goal is derived from the current balance each time
//! progress is shown; see [`crate::reports::goal_progress`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Amount;

/// A named savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target: Amount,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Amount, deadline: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            target,
            deadline,
        }
    }

    /// Build a goal from raw form input; an empty deadline means none
    pub fn from_input(
        name: &str,
        target: f64,
        deadline: Option<&str>,
    ) -> Result<Self, GoalValidationError> {
        let deadline = match deadline.map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => Some(
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| GoalValidationError::InvalidDeadline(d.to_string()))?,
            ),
            None => None,
        };

        let goal = Self::new(name.trim(), Amount::new(target), deadline);
        goal.validate()?;
        Ok(goal)
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target.value()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(f64),
    InvalidDeadline(String),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name is required"),
            Self::NonPositiveTarget(t) => {
                write!(f, "Goal target must be a positive number, got {}", t)
            }
            Self::InvalidDeadline(d) => write!(f, "Invalid deadline '{}'. Use YYYY-MM-DD", d),
        }
    }
}

impl std::error::Error for GoalValidationError {}
