//! Monthly History Report
//!
//! One row per calendar month with data: income, expenses, the balance
//! left over and a rating of how much was saved relative to spending.

use std::fmt;

use serde::Serialize;

use crate::config::Settings;
use crate::display::report::{double_separator, format_heading, separator};
use crate::models::{Money, Transaction};

use super::trend::{monthly_totals, YearMonth};

/// How well a month went, judged on balance versus expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl PerformanceRating {
    /// Rate a month from its balance and expenses
    ///
    /// The ratio balance / expenses is compared against 10, 5 and 3 using
    /// exact integer arithmetic. A month with no expenses is Excellent when
    /// anything was saved at all.
    pub fn rate(balance: Money, expenses: Money) -> Self {
        if expenses.is_zero() {
            return if balance.is_positive() {
                Self::Excellent
            } else {
                Self::NeedsAttention
            };
        }

        let balance = i128::from(balance.cents());
        let expenses = i128::from(expenses.cents());
        if balance > expenses * 10 {
            Self::Excellent
        } else if balance > expenses * 5 {
            Self::Good
        } else if balance > expenses * 3 {
            Self::Fair
        } else {
            Self::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single month in the history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: YearMonth,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub count: usize,
    pub rating: PerformanceRating,
}

/// Monthly History Report
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    /// Restrict to this calendar year, if set
    pub year: Option<i32>,
    /// Months with data, newest first
    pub months: Vec<MonthRow>,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Sum of monthly balances
    pub total_saved: Money,
}

impl HistoryReport {
    /// Generate the history, optionally limited to one year
    pub fn generate(transactions: &[Transaction], year: Option<i32>) -> Self {
        let months: Vec<MonthRow> = monthly_totals(transactions)
            .into_iter()
            .rev()
            .filter(|(month, _)| year.map_or(true, |y| month.year == y))
            .map(|(month, totals)| {
                let balance = totals.balance();
                MonthRow {
                    month,
                    income: totals.income,
                    expenses: totals.expenses,
                    balance,
                    count: totals.count,
                    rating: PerformanceRating::rate(balance, totals.expenses),
                }
            })
            .collect();

        log::debug!("History covers {} months (year filter: {:?})", months.len(), year);

        Self {
            year,
            total_income: months.iter().map(|m| m.income).sum(),
            total_expenses: months.iter().map(|m| m.expenses).sum(),
            total_saved: months.iter().map(|m| m.balance).sum(),
            months,
        }
    }

    /// Number of months with at least one transaction
    pub fn months_tracked(&self) -> usize {
        self.months.len()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        match self.year {
            Some(year) => output.push_str(&format!("Monthly History: {}\n", year)),
            None => output.push_str("Monthly History\n"),
        }
        output.push_str(&double_separator(78));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No monthly data.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14} {:>16}\n",
            "Month", "Income", "Expenses", "Balance", "Performance"
        ));
        output.push_str(&separator(78));
        output.push('\n');
        for row in &self.months {
            output.push_str(&format!(
                "{:<16} {:>14} {:>14} {:>14} {:>16}\n",
                row.month,
                row.income.format_with_symbol(symbol),
                row.expenses.format_with_symbol(symbol),
                row.balance.format_with_symbol(symbol),
                row.rating
            ));
        }
        output.push('\n');

        output.push_str(&format_heading("Summary"));
        output.push_str(&format!("Months tracked: {}\n", self.months_tracked()));
        output.push_str(&format!(
            "Total income:   {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total expenses: {}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total saved:    {}\n",
            self.total_saved.format_with_symbol(symbol)
        ));

        output
    }
}
