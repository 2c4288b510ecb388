//! Transaction model
//!
//! A transaction is a single income or expense event. Its kind is carried by
//! its category, so the two can never disagree. Amounts are stored as
//! non-negative magnitudes; the kind decides the sign at display time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Both kinds, income first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// Preset amounts (whole currency units) offered when recording this kind
    pub fn quick_amounts(&self) -> &'static [i64] {
        match self {
            Self::Income => &[500, 1000, 2000, 3000, 5000],
            Self::Expense => &[10, 25, 50, 100, 200, 500],
        }
    }

    /// Lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse a kind name, case-insensitive ("expenses" is accepted too)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" | "expenses" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Apply this kind's display sign to a stored magnitude
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Category, which also determines the kind
    pub category: Category,

    /// Magnitude of the transaction (never negative)
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Largest amount a single record may carry (one billion units)
    ///
    /// Kind totals fit in `i64` for up to ~92 million records at this bound.
    pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000);

    /// Create a new transaction with a fresh ID
    pub fn new(category: impl Into<Category>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            category: category.into(),
            amount,
            date,
            description: None,
        }
    }

    /// Attach a description; blank text clears it
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// Amount with the display sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        self.kind().signed(self.amount)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Self::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.signed_amount().format_signed("$")
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Transaction amount must not exceed {} (got {})",
                Transaction::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 12).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(IncomeCategory::Salary, Money::from_units(12000), date());
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert!(txn.is_income());
        assert!(!txn.is_expense());
        assert_eq!(txn.description, None);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(TransactionKind::from_name("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::from_name(" expenses "), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::from_name("transfer"), None);
    }

    #[test]
    fn test_signed_amount() {
        let rent = Transaction::new(ExpenseCategory::Rent, Money::from_units(1200), date());
        assert_eq!(rent.amount, Money::from_units(1200));
        assert_eq!(rent.signed_amount(), Money::from_units(-1200));
    }

    #[test]
    fn test_with_description() {
        let txn = Transaction::new(ExpenseCategory::Food, Money::from_units(30), date())
            .with_description("  lunch ");
        assert_eq!(txn.description.as_deref(), Some("lunch"));

        let blank = txn.with_description("   ");
        assert_eq!(blank.description, None);
    }

    #[test]
    fn test_validate_negative_amount() {
        let mut txn = Transaction::new(ExpenseCategory::Food, Money::from_units(30), date());
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_cents(-1);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-1)))
        );
    }

    #[test]
    fn test_validate_amount_limit() {
        let mut txn = Transaction::new(ExpenseCategory::Rent, Transaction::MAX_AMOUNT, date());
        assert!(txn.validate().is_ok());

        txn.amount = Transaction::MAX_AMOUNT + Money::from_cents(1);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_quick_amounts() {
        assert_eq!(TransactionKind::Expense.quick_amounts()[0], 10);
        assert_eq!(TransactionKind::Income.quick_amounts().len(), 5);
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(ExpenseCategory::Rent, Money::from_units(1200), date())
            .with_description("February rent");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains(r#""kind":"expense""#));
        assert!(json.contains(r#""category":"Rent""#));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(ExpenseCategory::Shopping, Money::from_units(430), date());
        assert_eq!(format!("{}", txn), "2025-02-12 Shopping -$430.00");
    }
}
