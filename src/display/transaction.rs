//! Transaction display formatting

use crate::models::{Amount, Transaction, TransactionKind};

use super::report::truncate;

/// Format a single transaction as a listing row
pub fn format_transaction_row(txn: &Transaction, currency: &str) -> String {
    format!(
        "{} {:24} {:12} {:>14}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        truncate(&txn.category, 12),
        txn.amount.format_with_symbol(currency)
    )
}

/// Format all incomes or all expenses, with a total line
pub fn format_transaction_list(
    kind: TransactionKind,
    transactions: &[Transaction],
    currency: &str,
) -> String {
    if transactions.is_empty() {
        return format!("No {} recorded yet.\n", plural(kind));
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:12} {:>14}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(63));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    let total: Amount = transactions.iter().map(|t| t.amount).sum();
    output.push_str(&"-".repeat(63));
    output.push('\n');
    output.push_str(&format!(
        "{:<48} {:>14}\n",
        format!("Total {} ({})", kind.noun(), transactions.len()),
        total.format_with_symbol(currency)
    ));

    output
}

fn plural(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "incomes",
        TransactionKind::Expense => "expenses",
    }
}
