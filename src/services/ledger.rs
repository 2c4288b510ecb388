//! In-memory transaction ledger
//!
//! The ledger is the caller-owned collection that every report is computed
//! from. Nothing is persisted; a ledger lives as long as its owner.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Transaction, TransactionId, TransactionKind};

use super::validation::ValidTransaction;

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Only transactions on or after `start`
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only transactions on or before `end`
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single transaction against every set criterion except the limit
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind() == kind)
            && self.category.map_or(true, |category| txn.category == category)
            && self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
    }
}

/// An owned, ordered collection of transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records
    ///
    /// Records are inserted one by one, so duplicates and invalid records are
    /// rejected.
    pub fn from_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> FintrackResult<Self> {
        let mut ledger = Self::new();
        for txn in transactions {
            ledger.insert(txn)?;
        }
        Ok(ledger)
    }

    /// Add a validated candidate, assigning it a fresh ID
    pub fn add(&mut self, valid: ValidTransaction) -> &Transaction {
        let mut txn = valid.into_transaction();
        while self.get(txn.id).is_some() {
            txn.id = TransactionId::new();
        }
        log::debug!("Adding transaction {} ({})", txn.id, txn);
        let index = self.transactions.len();
        self.transactions.push(txn);
        &self.transactions[index]
    }

    /// Insert an already-built transaction
    pub fn insert(&mut self, txn: Transaction) -> FintrackResult<()> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        if self.get(txn.id).is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        log::debug!("Inserting transaction {} ({})", txn.id, txn);
        self.transactions.push(txn);
        Ok(())
    }

    /// Remove a transaction by ID
    pub fn remove(&mut self, id: TransactionId) -> FintrackResult<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let removed = self.transactions.remove(index);
        log::debug!("Removed transaction {} ({})", removed.id, removed);
        Ok(removed)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Find a transaction by a user-typed reference (`txn-xxxxxxxx` or a full UUID)
    ///
    /// An ambiguous short reference is an error rather than a guess.
    pub fn find(&self, reference: &str) -> FintrackResult<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(reference));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(FintrackError::Validation(format!(
                "Transaction reference '{}' is ambiguous",
                reference
            ))),
            (None, _) => Err(FintrackError::transaction_not_found(reference)),
        }
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions matching `filter`, newest first
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let mut matching: Vec<&Transaction> = self
            .transactions
            .iter()
            .rev()
            .filter(|t| filter.matches(t))
            .collect();

        // Stable sort keeps later-inserted records first within a day
        matching.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            matching.truncate(limit);
        }
        matching
    }

    /// The most recent `limit` transactions, newest first
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.filter(&TransactionFilter::new().limit(limit))
    }
}
