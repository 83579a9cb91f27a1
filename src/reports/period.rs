//! Period Report
//!
//! Totals and itemized entries for an inclusive date range, plus the two
//! slices of the income-vs-expense chart.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Amount, LedgerState, Transaction, TransactionKind};

/// An entry that fell inside the range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportItem {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub category: String,
}

impl ReportItem {
    fn from_transaction(kind: TransactionKind, txn: &Transaction) -> Self {
        Self {
            kind,
            description: txn.description.clone(),
            amount: txn.amount,
            date: txn.date,
            category: txn.category.clone(),
        }
    }
}

/// One slice of the income-vs-expense chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: Amount,
}

/// Report over `start..=end`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_income: Amount,
    pub total_expense: Amount,
    pub remaining: Amount,
    /// Incomes first, then expenses, each in ledger order
    pub items: Vec<ReportItem>,
}

impl PeriodReport {
    /// Generate a report; both bounds are required
    pub fn generate(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        state: &LedgerState,
    ) -> PocketbookResult<Self> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(PocketbookError::Validation(
                "Please select both start and end dates.".into(),
            ));
        };

        let in_range = |t: &&Transaction| start <= t.date && t.date <= end;

        let mut items = Vec::new();
        let mut total_income = Amount::zero();
        let mut total_expense = Amount::zero();

        for txn in state.incomes.iter().filter(in_range) {
            total_income += txn.amount;
            items.push(ReportItem::from_transaction(TransactionKind::Income, txn));
        }
        for txn in state.expenses.iter().filter(in_range) {
            total_expense += txn.amount;
            items.push(ReportItem::from_transaction(TransactionKind::Expense, txn));
        }

        Ok(Self {
            start,
            end,
            total_income,
            total_expense,
            remaining: total_income - total_expense,
            items,
        })
    }

    /// Income and expense slices, in that order
    pub fn chart(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                label: "Income",
                value: self.total_income,
            },
            ChartSlice {
                label: "Expense",
                value: self.total_expense,
            },
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Report: {} to {}\n", self.start, self.end));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total income:  {:>14}\n",
            self.total_income.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total expense: {:>14}\n",
            self.total_expense.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Remaining:     {:>14}\n\n",
            self.remaining.format_with_symbol(currency)
        ));

        let chart_total = (self.total_income + self.total_expense).value();
        for slice in self.chart() {
            let pct = if chart_total > 0.0 {
                slice.value.value() / chart_total * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "{:<8} {} {:>6}\n",
                slice.label,
                format_bar(slice.value.value(), chart_total, 30),
                format_percentage(pct)
            ));
        }
        output.push('\n');

        if self.items.is_empty() {
            output.push_str("No transactions in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:<10} {:<24} {:<12} {:>14}\n",
            "Type", "Date", "Description", "Category", "Amount"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for item in &self.items {
            output.push_str(&format!(
                "{:<8} {:<10} {:<24} {:<12} {:>14}\n",
                item.kind,
                item.date.format("%Y-%m-%d").to_string(),
                truncate(&item.description, 24),
                truncate(&item.category, 12),
                item.amount.format_with_symbol(currency)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn txn(desc: &str, amount: f64, d: &str) -> Transaction {
        Transaction::from_input(desc, amount, d, "Food").unwrap()
    }

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::new();
        state.record(TransactionKind::Income, txn("Salary", 1000.0, "2024-05-01"));
        state.record(TransactionKind::Income, txn("Bonus", 300.0, "2024-06-01"));
        state.record(TransactionKind::Expense, txn("Groceries", 80.0, "2024-05-15"));
        state.record(TransactionKind::Expense, txn("Dinner", 40.0, "2024-05-31"));
        state.record(TransactionKind::Expense, txn("Fuel", 60.0, "2024-06-01"));
        state
    }

    #[test]
    fn test_inclusive_range() {
        let state = sample_state();
        let report =
            PeriodReport::generate(Some(date("2024-05-01")), Some(date("2024-05-31")), &state)
                .unwrap();

        let dates: Vec<_> = report.items.iter().map(|i| i.date).collect();
        assert!(dates.contains(&date("2024-05-15")));
        assert!(dates.contains(&date("2024-05-31")));
        assert!(!dates.contains(&date("2024-06-01")));

        assert_eq!(report.total_income, Amount::new(1000.0));
        assert_eq!(report.total_expense, Amount::new(120.0));
        assert_eq!(report.remaining, Amount::new(880.0));
    }

    #[test]
    fn test_incomes_before_expenses() {
        let state = sample_state();
        let report =
            PeriodReport::generate(Some(date("2024-01-01")), Some(date("2024-12-31")), &state)
                .unwrap();

        let kinds: Vec<_> = report.items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Income,
                TransactionKind::Income,
                TransactionKind::Expense,
                TransactionKind::Expense,
                TransactionKind::Expense,
            ]
        );
        assert_eq!(report.items[2].description, "Groceries");
    }

    #[test]
    fn test_missing_date_is_validation_error() {
        let state = sample_state();
        let err = PeriodReport::generate(Some(date("2024-05-01")), None, &state).unwrap_err();
        assert!(err.is_validation());
        assert!(PeriodReport::generate(None, None, &state)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let state = sample_state();
        let report =
            PeriodReport::generate(Some(date("2024-05-31")), Some(date("2024-05-01")), &state)
                .unwrap();

        assert!(report.is_empty());
        assert_eq!(report.remaining, Amount::zero());
    }

    #[test]
    fn test_chart_slices() {
        let state = sample_state();
        let report =
            PeriodReport::generate(Some(date("2024-05-01")), Some(date("2024-05-31")), &state)
                .unwrap();

        let [income, expense] = report.chart();
        assert_eq!(income.label, "Income");
        assert_eq!(income.value, Amount::new(1000.0));
        assert_eq!(expense.label, "Expense");
        assert_eq!(expense.value, Amount::new(120.0));
    }

    #[test]
    fn test_terminal_format() {
        let state = sample_state();
        let output =
            PeriodReport::generate(Some(date("2024-05-01")), Some(date("2024-05-31")), &state)
                .unwrap()
                .format_terminal("$");

        assert!(output.contains("Report: 2024-05-01 to 2024-05-31"));
        assert!(output.contains("$880.00"));
        assert!(output.contains("Groceries"));
        assert!(!output.contains("Fuel"));

        let empty = PeriodReport::generate(
            Some(date("2030-01-01")),
            Some(date("2030-01-31")),
            &state,
        )
        .unwrap()
        .format_terminal("$");
        assert!(empty.contains("No transactions in this period."));
    }
}
