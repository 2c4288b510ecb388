//! fintrack - Terminal personal finance tracker
//!
//! This library provides the core of the fintrack application: a transaction
//! aggregator that derives totals, net balance, per-category breakdowns and
//! top categories from a snapshot of records, and a validator that turns raw
//! form input into a typed transaction or the full list of reasons it was
//! rejected.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `services`: Input validation and the in-memory ledger
//! - `reports`: Aggregation and the page reports built on it
//! - `display`: Terminal formatting helpers
//! - `sample`: Seed data for a new session
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use fintrack::models::TransactionKind;
//! use fintrack::reports::{net_balance, top_category};
//! use fintrack::services::{validate_transaction_input, Ledger, TransactionInput};
//!
//! let mut ledger = Ledger::new();
//! let input = TransactionInput::new(TransactionKind::Expense, "1200", "Rent", "2025-01-01");
//! ledger.add(validate_transaction_input(&input).unwrap());
//!
//! assert_eq!(net_balance(ledger.transactions()).cents(), -120_000);
//! assert!(top_category(ledger.transactions(), TransactionKind::Expense).is_some());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod sample;
pub mod services;

pub use error::FintrackError;
