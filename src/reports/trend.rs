//! Time series over transactions
//!
//! Monthly and daily groupings used by the dashboard trend, the income and
//! expense charts, and the monthly history.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Full month name, e.g. "February"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    /// Three-letter label, e.g. "Feb"
    pub fn short_label(&self) -> &'static str {
        let name = self.month_name();
        &name[..name.len().min(3)]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} {}", self.month_name(), self.year))
    }
}

/// Income, expenses and record count for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthTotals {
    pub income: Money,
    pub expenses: Money,
    pub count: usize,
}

impl MonthTotals {
    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income - self.expenses
    }

    fn add(&mut self, txn: &Transaction) {
        match txn.kind() {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expenses += txn.amount,
        }
        self.count += 1;
    }
}

/// Group all transactions by calendar month, oldest first
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<YearMonth, MonthTotals> {
    let mut months: BTreeMap<YearMonth, MonthTotals> = BTreeMap::new();
    for txn in transactions {
        months.entry(YearMonth::of(txn.date)).or_default().add(txn);
    }
    months
}

/// The most recent `limit` months that have data, oldest first
pub fn recent_months(transactions: &[Transaction], limit: usize) -> Vec<(YearMonth, MonthTotals)> {
    let months = monthly_totals(transactions);
    let skip = months.len().saturating_sub(limit);
    months.into_iter().skip(skip).collect()
}

/// Per-day totals of `kind`, ascending by date
///
/// Days without a transaction of `kind` are omitted.
pub fn daily_series(transactions: &[Transaction], kind: TransactionKind) -> Vec<(NaiveDate, Money)> {
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.kind() == kind) {
        *days.entry(txn.date).or_default() += txn.amount;
    }
    days.into_iter().collect()
}
