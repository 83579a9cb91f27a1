//! Dashboard summary
//!
//! Totals for the whole ledger with a one-line note about the balance.

use serde::Serialize;

use crate::models::{Amount, BudgetMonth, LedgerState, LedgerTotals};

/// Balance below this share of total income counts as low
pub const LOW_BALANCE_RATIO: f64 = 0.10;

/// What the dashboard says about the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceNote {
    Negative,
    Low,
    OnTrack,
}

impl BalanceNote {
    pub fn for_totals(totals: &LedgerTotals) -> Self {
        if totals.balance.is_negative() {
            Self::Negative
        } else if totals.balance.value() < totals.total_income.value() * LOW_BALANCE_RATIO {
            Self::Low
        } else {
            Self::OnTrack
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Negative => "Warning: your balance is negative.",
            Self::Low => "Your remaining balance is low. Consider reducing expenses.",
            Self::OnTrack => "You are on track. Keep monitoring your spending.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub totals: LedgerTotals,
    pub note: BalanceNote,
    pub income_count: usize,
    pub expense_count: usize,
    pub goal_count: usize,
    pub budget_month: Option<BudgetMonth>,
}

impl Dashboard {
    pub fn generate(state: &LedgerState) -> Self {
        let totals = state.totals();
        Self {
            note: BalanceNote::for_totals(&totals),
            totals,
            income_count: state.incomes.len(),
            expense_count: state.expenses.len(),
            goal_count: state.goals.len(),
            budget_month: state.budget_plan.as_ref().map(|p| p.month),
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let row = |label: &str, amount: Amount| {
            format!("{:<16}{:>14}\n", label, amount.format_with_symbol(currency))
        };

        let mut output = String::new();
        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(30));
        output.push('\n');
        output.push_str(&row("Total income", self.totals.total_income));
        output.push_str(&row("Total expenses", self.totals.total_expense));
        output.push_str(&row("Balance", self.totals.balance));
        output.push('\n');
        output.push_str(&format!(
            "{} incomes, {} expenses, {} goals\n",
            self.income_count, self.expense_count, self.goal_count
        ));
        match self.budget_month {
            Some(month) => output.push_str(&format!("Budget plan: {}\n", month.friendly())),
            None => output.push_str("Budget plan: none\n"),
        }
        output.push('\n');
        output.push_str(self.note.message());
        output.push('\n');
        output
    }
}
