//! Transaction aggregation
//!
//! Pure reductions over a borrowed snapshot of transactions. Nothing here
//! mutates its input or keeps a reference past the call, and every result
//! is independent of input order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Money, Transaction, TransactionKind};

/// Total amount and record count for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryTotal {
    pub total: Money,
    pub count: usize,
}

/// Per-category totals, iterated in category enumeration order
pub type CategoryBreakdown = BTreeMap<Category, CategoryTotal>;

/// Sum of amounts over all transactions of `kind`
///
/// Zero for an empty snapshot. Saturates at the `i64` bounds, which records
/// under [`Transaction::MAX_AMOUNT`] cannot reach in practice.
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.amount)
        .sum()
}

/// Number of transactions of `kind`
pub fn transaction_count(transactions: &[Transaction], kind: TransactionKind) -> usize {
    transactions.iter().filter(|t| t.kind() == kind).count()
}

/// Total income minus total expenses; may be negative
pub fn net_balance(transactions: &[Transaction]) -> Money {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Group transactions of `kind` by category, summing amounts and counting records
///
/// Categories with no matching records are absent from the map.
pub fn category_breakdown(transactions: &[Transaction], kind: TransactionKind) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::new();
    for txn in transactions.iter().filter(|t| t.kind() == kind) {
        let entry = breakdown.entry(txn.category).or_default();
        entry.total += txn.amount;
        entry.count += 1;
    }
    breakdown
}

/// The category of `kind` with the greatest total
///
/// Ties go to the category that comes first in enumeration order. `None`
/// when there are no transactions of `kind`.
pub fn top_category(transactions: &[Transaction], kind: TransactionKind) -> Option<Category> {
    top_of(&category_breakdown(transactions, kind))
}

/// Pick the top category from an existing breakdown
pub fn top_of(breakdown: &CategoryBreakdown) -> Option<Category> {
    let mut best: Option<(Category, Money)> = None;
    // BTreeMap iterates in enumeration order; strict `>` keeps the earlier tie
    for (category, totals) in breakdown {
        match best {
            Some((_, best_total)) if totals.total <= best_total => {}
            _ => best = Some((*category, totals.total)),
        }
    }
    best.map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};
    use chrono::NaiveDate;

    fn txn(category: impl Into<Category>, units: i64) -> Transaction {
        Transaction::new(
            category,
            Money::from_units(units),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    fn example() -> Vec<Transaction> {
        vec![
            txn(ExpenseCategory::Rent, 1200),
            txn(ExpenseCategory::Food, 300),
            txn(IncomeCategory::Salary, 3000),
        ]
    }

    #[test]
    fn test_example_totals() {
        let list = example();
        assert_eq!(
            total_by_kind(&list, TransactionKind::Expense),
            Money::from_units(1500)
        );
        assert_eq!(
            total_by_kind(&list, TransactionKind::Income),
            Money::from_units(3000)
        );
        assert_eq!(net_balance(&list), Money::from_units(1500));
        assert_eq!(
            top_category(&list, TransactionKind::Expense),
            Some(Category::Expense(ExpenseCategory::Rent))
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(total_by_kind(&empty, TransactionKind::Income), Money::zero());
        assert_eq!(total_by_kind(&empty, TransactionKind::Expense), Money::zero());
        assert_eq!(net_balance(&empty), Money::zero());
        assert!(category_breakdown(&empty, TransactionKind::Expense).is_empty());
        assert_eq!(top_category(&empty, TransactionKind::Expense), None);
        assert_eq!(transaction_count(&empty, TransactionKind::Income), 0);
    }

    #[test]
    fn test_negative_net_balance() {
        let list = vec![txn(ExpenseCategory::Rent, 900), txn(IncomeCategory::Gift, 100)];
        assert_eq!(net_balance(&list), Money::from_units(-800));
    }

    #[test]
    fn test_breakdown_groups_and_counts() {
        let list = vec![
            txn(ExpenseCategory::Food, 10),
            txn(ExpenseCategory::Food, 15),
            txn(ExpenseCategory::Transport, 670),
            txn(IncomeCategory::Salary, 3000),
        ];
        let breakdown = category_breakdown(&list, TransactionKind::Expense);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(
            breakdown[&Category::Expense(ExpenseCategory::Food)],
            CategoryTotal {
                total: Money::from_units(25),
                count: 2
            }
        );
        assert!(!breakdown.contains_key(&Category::Expense(ExpenseCategory::Rent)));
        assert!(!breakdown.contains_key(&Category::Income(IncomeCategory::Salary)));
    }

    #[test]
    fn test_breakdown_iterates_in_enumeration_order() {
        let list = vec![
            txn(ExpenseCategory::Other, 1),
            txn(ExpenseCategory::Rent, 1),
            txn(ExpenseCategory::Shopping, 1),
        ];
        let order: Vec<_> = category_breakdown(&list, TransactionKind::Expense)
            .into_keys()
            .collect();
        assert_eq!(
            order,
            vec![
                Category::Expense(ExpenseCategory::Rent),
                Category::Expense(ExpenseCategory::Shopping),
                Category::Expense(ExpenseCategory::Other),
            ]
        );
    }

    #[test]
    fn test_top_category_tie_uses_enumeration_order() {
        // Food is inserted first, but Rent comes first in the enumeration
        let list = vec![txn(ExpenseCategory::Food, 500), txn(ExpenseCategory::Rent, 500)];
        assert_eq!(
            top_category(&list, TransactionKind::Expense),
            Some(Category::Expense(ExpenseCategory::Rent))
        );

        let reversed: Vec<_> = list.into_iter().rev().collect();
        assert_eq!(
            top_category(&reversed, TransactionKind::Expense),
            Some(Category::Expense(ExpenseCategory::Rent))
        );
    }

    #[test]
    fn test_top_category_with_zero_amounts() {
        let list = vec![txn(IncomeCategory::Bonus, 0)];
        assert_eq!(
            top_category(&list, TransactionKind::Income),
            Some(Category::Income(IncomeCategory::Bonus))
        );
    }

    #[test]
    fn test_largest_accepted_amounts_sum_exactly() {
        use crate::services::{validate_transaction_input, Ledger, TransactionInput};

        let mut ledger = Ledger::new();
        for _ in 0..3 {
            let input =
                TransactionInput::new(TransactionKind::Expense, "1000000000", "Rent", "2025-01-01");
            ledger.add(validate_transaction_input(&input).unwrap());
        }

        let snapshot = ledger.transactions();
        assert_eq!(
            total_by_kind(snapshot, TransactionKind::Expense),
            Money::from_units(3_000_000_000)
        );
        assert_eq!(net_balance(snapshot), Money::from_units(-3_000_000_000));
    }

    #[test]
    fn test_out_of_range_totals_saturate() {
        let huge = |category: Category| {
            Transaction::new(
                category,
                Money::from_cents(i64::MAX / 2 + 1),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
        };
        let list = vec![
            huge(Category::Expense(ExpenseCategory::Rent)),
            huge(Category::Expense(ExpenseCategory::Rent)),
        ];

        assert_eq!(
            total_by_kind(&list, TransactionKind::Expense),
            Money::from_cents(i64::MAX)
        );
        assert_eq!(net_balance(&list), -Money::from_cents(i64::MAX));
        assert_eq!(
            category_breakdown(&list, TransactionKind::Expense)[&Category::Expense(ExpenseCategory::Rent)]
                .total,
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_cents_do_not_drift() {
        let list: Vec<_> = (0..10)
            .map(|_| {
                Transaction::new(
                    ExpenseCategory::Food,
                    Money::from_cents(10),
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                )
            })
            .collect();
        assert_eq!(total_by_kind(&list, TransactionKind::Expense), Money::from_units(1));
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let list = example();
        let before = list.clone();

        let first = category_breakdown(&list, TransactionKind::Expense);
        let second = category_breakdown(&list, TransactionKind::Expense);
        assert_eq!(first, second);
        assert_eq!(net_balance(&list), net_balance(&list));
        assert_eq!(list, before);
    }
}
