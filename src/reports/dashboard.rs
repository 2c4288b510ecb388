//! Dashboard Report
//!
//! The overview page: headline totals, the top categories, the most recent
//! transactions, and an income-vs-expenses trend over the last few months.

use crate::config::Settings;
use crate::display::report::{double_separator, format_bar, format_heading, format_percentage};
use crate::display::transaction::format_transaction_row;
use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::services::Ledger;

use super::aggregate::{net_balance, top_category, total_by_kind};
use super::trend::{recent_months, MonthTotals, YearMonth};

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Sum of all income
    pub total_income: Money,
    /// Sum of all expenses (positive magnitude)
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_balance: Money,
    /// Number of transactions in the ledger
    pub transaction_count: usize,
    /// Expense category with the largest total
    pub top_expense_category: Option<Category>,
    /// Income category with the largest total
    pub top_income_category: Option<Category>,
    /// Most recent transactions, newest first
    pub recent: Vec<Transaction>,
    /// Monthly totals for the most recent months with data, oldest first
    pub trend: Vec<(YearMonth, MonthTotals)>,
}

impl DashboardReport {
    /// Generate the dashboard for a ledger snapshot
    pub fn generate(ledger: &Ledger, recent_limit: usize, trend_months: usize) -> Self {
        let transactions = ledger.transactions();
        log::debug!(
            "Generating dashboard over {} transactions",
            transactions.len()
        );

        Self {
            total_income: total_by_kind(transactions, TransactionKind::Income),
            total_expenses: total_by_kind(transactions, TransactionKind::Expense),
            net_balance: net_balance(transactions),
            transaction_count: transactions.len(),
            top_expense_category: top_category(transactions, TransactionKind::Expense),
            top_income_category: top_category(transactions, TransactionKind::Income),
            recent: ledger.recent(recent_limit).into_iter().cloned().collect(),
            trend: recent_months(transactions, trend_months),
        }
    }

    /// Share of income that was spent, in percent (0 with no income)
    pub fn spent_share(&self) -> f64 {
        self.total_expenses.percent_of(self.total_income)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Balance",
            self.net_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Income",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Expenses",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<20} {:>16}\n", "Transactions", self.transaction_count));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Spent of income",
            format_percentage(self.spent_share())
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Top expense",
            category_or_none(self.top_expense_category)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n\n",
            "Top income",
            category_or_none(self.top_income_category)
        ));

        output.push_str(&format_heading("Recent Transactions"));
        if self.recent.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for txn in &self.recent {
            output.push_str(&format_transaction_row(txn, settings));
            output.push('\n');
        }
        output.push('\n');

        output.push_str(&format_heading("Monthly Trends"));
        if self.trend.is_empty() {
            output.push_str("No monthly data.\n");
        }
        let max = self
            .trend
            .iter()
            .map(|(_, totals)| totals.income.max(totals.expenses).cents())
            .max()
            .unwrap_or(0);
        for (month, totals) in &self.trend {
            output.push_str(&format!(
                "{} {}  in  {} {:>14}\n",
                month.short_label(),
                month.year,
                format_bar(totals.income.cents(), max, settings.bar_width),
                totals.income.format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "{:8}  out {} {:>14}\n",
                "",
                format_bar(totals.expenses.cents(), max, settings.bar_width),
                totals.expenses.format_with_symbol(symbol)
            ));
        }

        output
    }
}

/// Display name of an optional category, "none" when absent
pub fn category_or_none(category: Option<Category>) -> &'static str {
    category.map(|c| c.name()).unwrap_or("none")
}
