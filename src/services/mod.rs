//! Business logic layer for fintrack
//!
//! Input validation and the in-memory ledger that callers own and pass to
//! the reports.

pub mod ledger;
pub mod validation;

pub use ledger::{Ledger, TransactionFilter};
pub use validation::{
    validate_transaction_input, InvalidTransaction, TransactionInput, ValidTransaction,
    ValidationReason,
};
