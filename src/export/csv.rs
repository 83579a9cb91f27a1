//! CSV Export functionality

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{LedgerState, TransactionKind};
use crate::reports::PeriodReport;

fn export_err(e: impl std::fmt::Display) -> PocketbookError {
    PocketbookError::Export(e.to_string())
}

fn row(
    kind: TransactionKind,
    date: String,
    description: &str,
    category: &str,
    amount: f64,
) -> [String; 5] {
    [
        kind.to_string(),
        date,
        description.to_string(),
        category.to_string(),
        format!("{:.2}", amount),
    ]
}

/// Export the items of a period report, followed by its totals
pub fn export_report_csv<W: Write>(report: &PeriodReport, writer: W) -> PocketbookResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Type", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for item in &report.items {
        csv.write_record(row(
            item.kind,
            item.date.to_string(),
            &item.description,
            &item.category,
            item.amount.value(),
        ))
        .map_err(export_err)?;
    }

    for (label, amount) in [
        ("Total income", report.total_income),
        ("Total expense", report.total_expense),
        ("Remaining", report.remaining),
    ] {
        let amount = format!("{:.2}", amount.value());
        csv.write_record(["", "", label, "", amount.as_str()])
            .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export every income and expense in ledger order
pub fn export_transactions_csv<W: Write>(state: &LedgerState, writer: W) -> PocketbookResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Type", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for (kind, list) in [
        (TransactionKind::Income, &state.incomes),
        (TransactionKind::Expense, &state.expenses),
    ] {
        for txn in list {
            csv.write_record(row(
                kind,
                txn.date.to_string(),
                &txn.description,
                &txn.category,
                txn.amount.value(),
            ))
            .map_err(export_err)?;
        }
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::new();
        state.record(
            TransactionKind::Income,
            Transaction::from_input("Salary", 1000.0, "2024-05-01", "Job").unwrap(),
        );
        state.record(
            TransactionKind::Expense,
            Transaction::from_input("Rice, beans", 12.5, "2024-05-03", "Food").unwrap(),
        );
        state
    }

    #[test]
    fn test_report_csv() {
        let state = sample_state();
        let report = PeriodReport::generate(
            NaiveDate::from_ymd_opt(2024, 5, 1),
            NaiveDate::from_ymd_opt(2024, 5, 31),
            &state,
        )
        .unwrap();

        let mut out = Vec::new();
        export_report_csv(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Type,Date,Description,Category,Amount");
        assert_eq!(lines[1], "Income,2024-05-01,Salary,Job,1000.00");
        assert_eq!(lines[2], "Expense,2024-05-03,\"Rice, beans\",Food,12.50");
        assert_eq!(lines[5], ",,Remaining,,987.50");
    }

    #[test]
    fn test_transactions_csv() {
        let mut out = Vec::new();
        export_transactions_csv(&sample_state(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Income,2024-05-01,Salary,Job,1000.00"));
    }
}
