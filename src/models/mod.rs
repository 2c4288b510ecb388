//! Core data models for fintrack
//!
//! Money, identifiers, the kind-dependent category sets, and the transaction
//! record itself.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, ExpenseCategory, IncomeCategory};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
