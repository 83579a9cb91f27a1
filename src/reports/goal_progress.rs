//! Goal Progress Report
//!
//! Splits the non-negative balance equally across all goals. Nothing is
//! stored; progress is recomputed from the balance every time.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{format_bar, format_percentage_fixed};
use crate::models::{Amount, Goal};

pub const NO_GOALS_MESSAGE: &str = "No saving goals yet.";

/// Progress of one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub target: Amount,
    pub deadline: Option<NaiveDate>,
    /// `min(target, per_goal)`
    pub allocated: Amount,
    /// 0..=100
    pub progress_pct: f64,
}

/// Balance allocation across all goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgressReport {
    /// `max(0, balance)`
    pub available: Amount,
    pub per_goal: Amount,
    pub goals: Vec<GoalProgress>,
}

impl GoalProgressReport {
    /// Allocate a balance across goals in listing order
    pub fn allocate(balance: Amount, goals: &[Goal]) -> Self {
        let available = balance.max(Amount::zero());
        let per_goal = if goals.is_empty() {
            Amount::zero()
        } else {
            Amount::new(available.value() / goals.len() as f64)
        };

        let goals = goals
            .iter()
            .map(|goal| {
                let allocated = goal.target.min(per_goal);
                let progress_pct = if goal.target.value() > 0.0 {
                    allocated.value() / goal.target.value() * 100.0
                } else {
                    0.0
                };
                GoalProgress {
                    name: goal.name.clone(),
                    target: goal.target,
                    deadline: goal.deadline,
                    allocated,
                    progress_pct,
                }
            })
            .collect();

        Self {
            available,
            per_goal,
            goals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Format the goal list for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.goals.is_empty() {
            return format!("{}\n", NO_GOALS_MESSAGE);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Savings Goals (available {}, {} per goal)\n",
            self.available.format_with_symbol(currency),
            self.per_goal.format_with_symbol(currency)
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for goal in &self.goals {
            let deadline = goal
                .deadline
                .map(|d| format!(" (by {})", d))
                .unwrap_or_default();
            output.push_str(&format!(
                "{}: target {}{}\n",
                goal.name,
                goal.target.format_with_symbol(currency),
                deadline
            ));
            output.push_str(&format!(
                "  {} {:>6}\n",
                format_bar(goal.progress_pct, 100.0, 30),
                format_percentage_fixed(goal.progress_pct)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str, target: f64) -> Goal {
        Goal::from_input(name, target, None).unwrap()
    }

    #[test]
    fn test_equal_split() {
        let goals = vec![goal("Car", 150.0), goal("Trip", 100.0)];
        let report = GoalProgressReport::allocate(Amount::new(200.0), &goals);

        assert_eq!(report.per_goal, Amount::new(100.0));
        assert_eq!(report.goals[0].allocated, Amount::new(100.0));
        assert_eq!(format!("{:.1}", report.goals[0].progress_pct), "66.7");
        assert_eq!(report.goals[1].allocated, Amount::new(100.0));
        assert_eq!(format!("{:.1}", report.goals[1].progress_pct), "100.0");
    }

    #[test]
    fn test_negative_balance_allocates_nothing() {
        let goals = vec![goal("Car", 150.0)];
        let report = GoalProgressReport::allocate(Amount::new(-50.0), &goals);

        assert_eq!(report.available, Amount::zero());
        assert_eq!(report.goals[0].allocated, Amount::zero());
        assert_eq!(report.goals[0].progress_pct, 0.0);
    }

    #[test]
    fn test_no_goals() {
        let report = GoalProgressReport::allocate(Amount::new(500.0), &[]);
        assert!(report.is_empty());
        assert_eq!(report.per_goal, Amount::zero());
        assert_eq!(report.format_terminal("$"), "No saving goals yet.\n");
    }

    #[test]
    fn test_recomputed_from_current_balance() {
        let goals = vec![goal("Car", 100.0)];
        let rich = GoalProgressReport::allocate(Amount::new(100.0), &goals);
        let poor = GoalProgressReport::allocate(Amount::new(10.0), &goals);

        assert_eq!(rich.goals[0].progress_pct, 100.0);
        assert_eq!(poor.goals[0].progress_pct, 10.0);
    }

    #[test]
    fn test_terminal_format() {
        let mut goals = vec![goal("Car", 150.0), goal("Trip", 100.0)];
        goals[1].deadline = NaiveDate::from_ymd_opt(2024, 12, 31);
        let output = GoalProgressReport::allocate(Amount::new(200.0), &goals).format_terminal("$");

        assert!(output.contains("Car: target $150.00\n"));
        assert!(output.contains("Trip: target $100.00 (by 2024-12-31)"));
        assert!(output.contains("66.7%"));
        assert!(output.contains("100.0%"));
    }
}
