//! Reports module for fintrack
//!
//! Aggregations over the ledger and the page reports built on them:
//! the dashboard, the income and expense overviews, and the monthly history.

pub mod aggregate;
pub mod category;
pub mod dashboard;
pub mod history;
pub mod trend;

pub use aggregate::{
    category_breakdown, net_balance, top_category, total_by_kind, transaction_count,
    CategoryBreakdown, CategoryTotal,
};
pub use category::{CategoryReport, CategoryRow};
pub use dashboard::DashboardReport;
pub use history::{HistoryReport, MonthRow, PerformanceRating};
pub use trend::{daily_series, monthly_totals, recent_months, MonthTotals, YearMonth};
