//! Transaction display formatting
//!
//! Register-style rows: date, kind marker, category, description, and the
//! amount with the sign its kind implies.

use crate::config::Settings;
use crate::models::{Transaction, TransactionKind};

use super::report::{format_date, separator, truncate};

/// Arrow marker for a transaction kind
pub fn kind_marker(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "↑",
        TransactionKind::Expense => "↓",
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let description = txn.description.as_deref().unwrap_or("");
    format!(
        "{} {:<10} {:<13} {:<22} {:>14}  {}",
        kind_marker(txn.kind()),
        format_date(txn.date, &settings.date_format),
        txn.category,
        truncate(description, 22),
        txn.signed_amount().format_signed(&settings.currency_symbol),
        txn.id
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<10} {:<13} {:<22} {:>14}  {}\n",
        "Date", "Category", "Description", "Amount", "ID"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Kind:        {}\n", txn.kind()));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.signed_amount().format_signed(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn.date, &settings.date_format)
    ));

    if let Some(description) = &txn.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}
