//! Ledger state
//!
//! The per-user aggregate: incomes, expenses, goals and the optional budget
//! plan. Serialized as one JSON blob with camelCase keys.

use serde::{Deserialize, Serialize};

use super::budget::BudgetPlan;
use super::goal::Goal;
use super::money::Amount;
use super::transaction::{Transaction, TransactionKind};

/// Everything stored for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    #[serde(default)]
    pub incomes: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub budget_plan: Option<BudgetPlan>,
}

/// Aggregate totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LedgerTotals {
    pub total_income: Amount,
    pub total_expense: Amount,
    pub balance: Amount,
}

impl LedgerState {
    /// An empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// The records of one kind, in arrival order
    pub fn entries(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.incomes,
            TransactionKind::Expense => &self.expenses,
        }
    }

    /// Append an already-validated transaction
    pub fn record(&mut self, kind: TransactionKind, txn: Transaction) -> &Transaction {
        let list = match kind {
            TransactionKind::Income => &mut self.incomes,
            TransactionKind::Expense => &mut self.expenses,
        };
        list.push(txn);
        &list[list.len() - 1]
    }

    /// Append an already-validated goal
    pub fn add_goal(&mut self, goal: Goal) -> &Goal {
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    /// Replace the active budget plan, returning the one it displaced
    pub fn replace_budget_plan(&mut self, plan: BudgetPlan) -> Option<BudgetPlan> {
        self.budget_plan.replace(plan)
    }

    /// Total income, total expense and the balance between them
    pub fn totals(&self) -> LedgerTotals {
        let total_income: Amount = self.incomes.iter().map(|t| t.amount).sum();
        let total_expense: Amount = self.expenses.iter().map(|t| t.amount).sum();
        LedgerTotals {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Number of recorded transactions of both kinds
    pub fn transaction_count(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, BudgetMonth};
    use chrono::NaiveDate;

    fn txn(desc: &str, amount: f64, date: &str) -> Transaction {
        Transaction::from_input(desc, amount, date, "Other").unwrap()
    }

    #[test]
    fn test_totals() {
        let mut state = LedgerState::new();
        state.record(TransactionKind::Income, txn("Salary", 1000.0, "2024-05-01"));
        state.record(TransactionKind::Income, txn("Gift", 50.25, "2024-05-03"));
        state.record(TransactionKind::Expense, txn("Rent", 700.0, "2024-05-02"));

        let totals = state.totals();
        assert_eq!(totals.total_income, Amount::new(1050.25));
        assert_eq!(totals.total_expense, Amount::new(700.0));
        assert_eq!(totals.balance, totals.total_income - totals.total_expense);
        assert_eq!(state.transaction_count(), 3);
    }

    #[test]
    fn test_empty_totals() {
        let totals = LedgerState::new().totals();
        assert_eq!(totals, LedgerTotals::default());
    }

    #[test]
    fn test_record_preserves_arrival_order() {
        let mut state = LedgerState::new();
        state.record(TransactionKind::Expense, txn("Late", 1.0, "2024-06-30"));
        state.record(TransactionKind::Expense, txn("Early", 2.0, "2024-01-01"));

        let names: Vec<_> = state
            .entries(TransactionKind::Expense)
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(names, vec!["Late", "Early"]);
    }

    #[test]
    fn test_replace_budget_plan_returns_previous() {
        let mut state = LedgerState::new();
        let may = BudgetPlan::new(BudgetMonth::parse("2024-05").unwrap());
        let june = BudgetPlan::new(BudgetMonth::parse("2024-06").unwrap())
            .with_limit(BudgetCategory::Food, Amount::new(50.0));

        assert!(state.replace_budget_plan(may.clone()).is_none());
        assert_eq!(state.replace_budget_plan(june.clone()), Some(may));
        assert_eq!(state.budget_plan, Some(june));
    }

    #[test]
    fn test_blob_shape_matches_stored_format() {
        let json = r#"{
            "incomes": [{"desc":"Salary","amount":1000,"date":"2024-05-01","category":"Job"}],
            "expenses": [],
            "goals": [{"name":"Car","target":5000,"deadline":null}],
            "budgetPlan": {"month":"2024-05","limits":{"Food":100,"Transport":0,"Rent":0,"Other":0}}
        }"#;

        let state: LedgerState = serde_json::from_str(json).unwrap();
        assert_eq!(state.incomes.len(), 1);
        assert_eq!(
            state.incomes[0].date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        let plan = state.budget_plan.as_ref().unwrap();
        assert_eq!(plan.limit_for(BudgetCategory::Food), Amount::new(100.0));

        let out = serde_json::to_value(&state).unwrap();
        assert!(out.get("budgetPlan").is_some());
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let state: LedgerState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, LedgerState::new());
    }
}
