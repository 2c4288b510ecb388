//! Seed data
//!
//! The ledger every session starts from unless `--empty` is given.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, ExpenseCategory, IncomeCategory, Money, Transaction};
use crate::services::Ledger;

const SAMPLE: &[(Category, i64, (i32, u32, u32), &str)] = &[
    (Category::Expense(ExpenseCategory::Shopping), 430, (2025, 2, 17), "Shopping"),
    (Category::Expense(ExpenseCategory::Food), 280, (2025, 2, 16), "Food & Dining"),
    (Category::Expense(ExpenseCategory::Transport), 670, (2025, 2, 13), "Travel"),
    (Category::Income(IncomeCategory::Salary), 12000, (2025, 2, 12), "Salary"),
    (Category::Expense(ExpenseCategory::Utilities), 200, (2025, 2, 11), "Electricity Bill"),
    (Category::Expense(ExpenseCategory::Other), 600, (2025, 2, 10), "Loan Repayment"),
    (Category::Expense(ExpenseCategory::Transport), 150, (2025, 2, 9), "Gas & Fuel"),
    (Category::Income(IncomeCategory::Investment), 8600, (2025, 1, 13), "Interest from Savings"),
    (Category::Income(IncomeCategory::Other), 11900, (2025, 1, 10), "E-commerce Sales"),
    (Category::Income(IncomeCategory::Freelance), 2400, (2025, 1, 10), "Graphic Design"),
];

/// Transactions the sample ledger is built from
pub fn sample_transactions() -> FintrackResult<Vec<Transaction>> {
    SAMPLE
        .iter()
        .map(|&(category, units, (y, m, d), description)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                FintrackError::Validation(format!("invalid sample date {}-{}-{}", y, m, d))
            })?;
            Ok(Transaction::new(category, Money::from_units(units), date)
                .with_description(description))
        })
        .collect()
}

/// A ledger pre-filled with the sample transactions
pub fn sample_ledger() -> FintrackResult<Ledger> {
    Ledger::from_transactions(sample_transactions()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::reports::{net_balance, top_category, total_by_kind};

    #[test]
    fn test_sample_ledger() {
        let ledger = sample_ledger().unwrap();
        assert_eq!(ledger.len(), 10);

        let txns = ledger.transactions();
        assert_eq!(
            total_by_kind(txns, TransactionKind::Income),
            Money::from_units(34900)
        );
        assert_eq!(
            total_by_kind(txns, TransactionKind::Expense),
            Money::from_units(2330)
        );
        assert_eq!(net_balance(txns), Money::from_units(32570));
        assert_eq!(
            top_category(txns, TransactionKind::Expense),
            Some(Category::Expense(ExpenseCategory::Transport))
        );
        assert_eq!(
            top_category(txns, TransactionKind::Income),
            Some(Category::Income(IncomeCategory::Salary))
        );
    }

    #[test]
    fn test_sample_ids_unique() {
        let ledger = sample_ledger().unwrap();
        let mut ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
