//! Transaction input validation
//!
//! Turns a raw form candidate (strings, as typed) into a typed transaction,
//! or into the complete list of reasons it was rejected. Every check runs so
//! the caller can show all problems at once.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Category, Money, Transaction, TransactionKind};

/// Date format accepted for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A transaction candidate as collected from a form or the command line
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl TransactionInput {
    /// Create an input with an empty description
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
            description: String::new(),
        }
    }

    /// Set the free-text description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A candidate that passed every check, ready to be added to a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTransaction {
    pub category: Category,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl ValidTransaction {
    /// Build the transaction record with a fresh ID
    pub fn into_transaction(self) -> Transaction {
        let txn = Transaction::new(self.category, self.amount, self.date);
        match self.description {
            Some(description) => txn.with_description(description),
            None => txn,
        }
    }
}

/// One reason a candidate was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("amount missing")]
    AmountMissing,

    #[error("amount is not a valid number: {0}")]
    AmountNotNumeric(String),

    #[error("amount must not be negative")]
    AmountNegative,

    #[error("amount must not exceed {}", Transaction::MAX_AMOUNT)]
    AmountTooLarge,

    #[error("category missing")]
    CategoryMissing,

    #[error("category '{category}' is not a valid {} category", .kind.as_str())]
    CategoryNotAllowed {
        kind: TransactionKind,
        category: String,
    },

    #[error("date missing")]
    DateMissing,

    #[error("date is not a valid calendar date: {0}")]
    DateMalformed(String),
}

/// A rejected candidate with every reason, in field order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_reasons(.reasons))]
pub struct InvalidTransaction {
    pub reasons: Vec<ValidationReason>,
}

impl InvalidTransaction {
    pub fn new(reasons: Vec<ValidationReason>) -> Self {
        Self { reasons }
    }

    /// Check whether a specific reason is present
    pub fn has(&self, reason: &ValidationReason) -> bool {
        self.reasons.contains(reason)
    }
}

fn join_reasons(reasons: &[ValidationReason]) -> String {
    reasons
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a transaction candidate
///
/// Never fails fast: amount, category and date are all checked and every
/// failure is reported.
pub fn validate_transaction_input(
    input: &TransactionInput,
) -> Result<ValidTransaction, InvalidTransaction> {
    let mut reasons = Vec::new();

    let amount = check_amount(&input.amount, &mut reasons);
    let category = check_category(input.kind, &input.category, &mut reasons);
    let date = check_date(&input.date, &mut reasons);

    match (amount, category, date) {
        (Some(amount), Some(category), Some(date)) => {
            let description = input.description.trim();
            Ok(ValidTransaction {
                category,
                amount,
                date,
                description: (!description.is_empty()).then(|| description.to_string()),
            })
        }
        _ => {
            log::warn!("Rejected transaction input: {}", join_reasons(&reasons));
            Err(InvalidTransaction::new(reasons))
        }
    }
}

fn check_amount(raw: &str, reasons: &mut Vec<ValidationReason>) -> Option<Money> {
    let raw = raw.trim();
    if raw.is_empty() {
        reasons.push(ValidationReason::AmountMissing);
        return None;
    }

    match Money::parse(raw) {
        // "-0" parses to zero but is still a negative entry
        Ok(amount) if amount.is_negative() || raw.starts_with('-') => {
            reasons.push(ValidationReason::AmountNegative);
            None
        }
        Ok(amount) if amount > Transaction::MAX_AMOUNT => {
            reasons.push(ValidationReason::AmountTooLarge);
            None
        }
        Ok(amount) => Some(amount),
        Err(_) => {
            reasons.push(ValidationReason::AmountNotNumeric(raw.to_string()));
            None
        }
    }
}

fn check_category(
    kind: TransactionKind,
    raw: &str,
    reasons: &mut Vec<ValidationReason>,
) -> Option<Category> {
    let raw = raw.trim();
    if raw.is_empty() {
        reasons.push(ValidationReason::CategoryMissing);
        return None;
    }

    let category = Category::parse(kind, raw);
    if category.is_none() {
        reasons.push(ValidationReason::CategoryNotAllowed {
            kind,
            category: raw.to_string(),
        });
    }
    category
}

fn check_date(raw: &str, reasons: &mut Vec<ValidationReason>) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        reasons.push(ValidationReason::DateMissing);
        return None;
    }

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            reasons.push(ValidationReason::DateMalformed(raw.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn expense(amount: &str, category: &str, date: &str) -> TransactionInput {
        TransactionInput::new(TransactionKind::Expense, amount, category, date)
    }

    #[test]
    fn test_missing_amount() {
        let err = validate_transaction_input(&expense("", "Rent", "2024-01-01")).unwrap_err();
        assert_eq!(err.reasons, vec![ValidationReason::AmountMissing]);
        assert_eq!(err.reasons[0].to_string(), "amount missing");
    }

    #[test]
    fn test_missing_category() {
        let err = validate_transaction_input(&expense("50", "", "2024-01-01")).unwrap_err();
        assert_eq!(err.reasons, vec![ValidationReason::CategoryMissing]);
        assert_eq!(err.reasons[0].to_string(), "category missing");
    }

    #[test]
    fn test_valid_input() {
        let valid = validate_transaction_input(&expense("50", "Rent", "2024-01-01")).unwrap();
        assert_eq!(valid.category, Category::Expense(ExpenseCategory::Rent));
        assert_eq!(valid.amount, Money::from_units(50));
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(valid.description, None);
    }

    #[test]
    fn test_reports_every_reason() {
        let err = validate_transaction_input(&expense(" ", "", "")).unwrap_err();
        assert_eq!(
            err.reasons,
            vec![
                ValidationReason::AmountMissing,
                ValidationReason::CategoryMissing,
                ValidationReason::DateMissing,
            ]
        );
        assert_eq!(err.to_string(), "amount missing; category missing; date missing");
    }

    #[test]
    fn test_non_numeric_and_negative_amounts() {
        let err = validate_transaction_input(&expense("abc", "Rent", "2024-01-01")).unwrap_err();
        assert!(err.has(&ValidationReason::AmountNotNumeric("abc".into())));

        let err = validate_transaction_input(&expense("-5", "Rent", "2024-01-01")).unwrap_err();
        assert_eq!(err.reasons, vec![ValidationReason::AmountNegative]);
    }

    #[test]
    fn test_negative_zero_rejected() {
        for raw in ["-0", "-$0.00", "-0.0"] {
            let err = validate_transaction_input(&expense(raw, "Food", "2024-01-01")).unwrap_err();
            assert_eq!(err.reasons, vec![ValidationReason::AmountNegative], "input {raw}");
        }
    }

    #[test]
    fn test_amount_upper_bound() {
        assert!(validate_transaction_input(&expense("1000000000", "Rent", "2025-01-01")).is_ok());

        let err = validate_transaction_input(&expense("1000000000.01", "Rent", "2025-01-01"))
            .unwrap_err();
        assert_eq!(err.reasons, vec![ValidationReason::AmountTooLarge]);
        assert_eq!(err.reasons[0].to_string(), "amount must not exceed $1,000,000,000.00");

        // Large enough that two of them would overflow an i64 total
        let err = validate_transaction_input(&expense("90000000000000000", "Rent", "2025-01-01"))
            .unwrap_err();
        assert!(err.has(&ValidationReason::AmountTooLarge));
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        assert!(validate_transaction_input(&expense("0", "Food", "2024-01-01")).is_ok());
    }

    #[test]
    fn test_category_checked_against_kind() {
        let err = validate_transaction_input(&expense("50", "Salary", "2024-01-01")).unwrap_err();
        assert_eq!(
            err.reasons,
            vec![ValidationReason::CategoryNotAllowed {
                kind: TransactionKind::Expense,
                category: "Salary".into(),
            }]
        );
        assert_eq!(
            err.reasons[0].to_string(),
            "category 'Salary' is not a valid expense category"
        );

        let income = TransactionInput::new(TransactionKind::Income, "50", "Salary", "2024-01-01");
        assert!(validate_transaction_input(&income).is_ok());
    }

    #[test]
    fn test_malformed_dates() {
        for bad in ["2024-02-30", "01/02/2024", "2024-13-01", "yesterday"] {
            let err = validate_transaction_input(&expense("50", "Rent", bad)).unwrap_err();
            assert_eq!(err.reasons, vec![ValidationReason::DateMalformed(bad.into())]);
        }
    }

    #[test]
    fn test_description_is_trimmed() {
        let input = expense("12.5", "Food", "2025-02-16").description("  Food & Dining ");
        let valid = validate_transaction_input(&input).unwrap();
        assert_eq!(valid.description.as_deref(), Some("Food & Dining"));
        assert_eq!(valid.amount.cents(), 1250);

        let txn = valid.into_transaction();
        assert_eq!(txn.description.as_deref(), Some("Food & Dining"));
        assert!(txn.is_expense());
    }
}
