//! Category Report
//!
//! The income and expense pages: one kind's total, its per-category
//! breakdown with shares, the daily series behind the chart, and the
//! individual transactions.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::report::{
    double_separator, format_bar, format_date, format_heading, format_percentage,
};
use crate::display::transaction::format_transaction_row;
use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::services::{Ledger, TransactionFilter};

use super::aggregate::{category_breakdown, top_of};
use super::dashboard::category_or_none;
use super::trend::daily_series;

/// One category line in the report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Share of the kind's total, in percent
    pub percentage: f64,
}

/// Category Report for a single kind
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub kind: TransactionKind,
    pub total: Money,
    pub count: usize,
    /// Rows sorted by total, largest first; ties in enumeration order
    pub rows: Vec<CategoryRow>,
    pub top_category: Option<Category>,
    /// Per-day totals, oldest first
    pub daily: Vec<(NaiveDate, Money)>,
    /// Transactions of this kind, newest first
    pub transactions: Vec<Transaction>,
}

impl CategoryReport {
    /// Generate the report for `kind`
    pub fn generate(ledger: &Ledger, kind: TransactionKind) -> Self {
        let snapshot = ledger.transactions();
        let breakdown = category_breakdown(snapshot, kind);
        log::debug!(
            "Generating {} report: {} categories",
            kind.as_str(),
            breakdown.len()
        );

        let total: Money = breakdown.values().map(|t| t.total).sum();
        let count = breakdown.values().map(|t| t.count).sum();

        let mut rows: Vec<CategoryRow> = breakdown
            .iter()
            .map(|(category, totals)| CategoryRow {
                category: *category,
                total: totals.total,
                count: totals.count,
                percentage: totals.total.percent_of(total),
            })
            .collect();
        // Stable: equal totals stay in enumeration order
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            kind,
            total,
            count,
            rows,
            top_category: top_of(&breakdown),
            daily: daily_series(snapshot, kind),
            transactions: ledger
                .filter(&TransactionFilter::new().kind(kind))
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let title = match self.kind {
            TransactionKind::Income => "Income Overview",
            TransactionKind::Expense => "Expense Overview",
        };

        let mut output = String::new();
        output.push_str(title);
        output.push('\n');
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!(
            "Total {}: {}\n",
            self.kind,
            self.total.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Transactions: {}\n", self.count));
        output.push_str(&format!(
            "Top category: {}\n\n",
            category_or_none(self.top_category)
        ));

        output.push_str(&format_heading("By Category"));
        if self.rows.is_empty() {
            output.push_str(&format!("No {} recorded.\n", self.kind.as_str()));
        }
        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} {:>14} {:>5} {:>7}\n",
                row.category,
                row.total.format_with_symbol(symbol),
                row.count,
                format_percentage(row.percentage)
            ));
        }
        output.push('\n');

        output.push_str(&format_heading("Daily"));
        let max = self.daily.iter().map(|(_, m)| m.cents()).max().unwrap_or(0);
        for (day, amount) in &self.daily {
            output.push_str(&format!(
                "{:<10} {} {:>14}\n",
                format_date(*day, &settings.date_format),
                format_bar(amount.cents(), max, settings.bar_width),
                amount.format_with_symbol(symbol)
            ));
        }
        output.push('\n');

        output.push_str(&format_heading("Transactions"));
        for txn in &self.transactions {
            output.push_str(&format_transaction_row(txn, settings));
            output.push('\n');
        }

        output
    }
}
