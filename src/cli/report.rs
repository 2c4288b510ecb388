//! CLI commands for the report views
//!
//! Dashboard, income and expense overviews, and the monthly history.

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::models::TransactionKind;
use crate::reports::{CategoryReport, DashboardReport, HistoryReport};
use crate::services::Ledger;

/// Print the dashboard
pub fn handle_dashboard_command(ledger: &Ledger, settings: &Settings) -> FintrackResult<()> {
    let report = DashboardReport::generate(ledger, settings.recent_limit, settings.trend_months);
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Print the income or expense overview
pub fn handle_kind_command(
    ledger: &Ledger,
    settings: &Settings,
    kind: TransactionKind,
) -> FintrackResult<()> {
    let report = CategoryReport::generate(ledger, kind);
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Print the monthly history
pub fn handle_history_command(
    ledger: &Ledger,
    settings: &Settings,
    year: Option<i32>,
) -> FintrackResult<()> {
    let report = HistoryReport::generate(ledger.transactions(), year);
    print!("{}", report.format_terminal(settings));
    Ok(())
}
