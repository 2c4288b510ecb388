//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and the ledger.

pub mod report;
pub mod transaction;

pub use report::{handle_dashboard_command, handle_history_command, handle_kind_command};
pub use transaction::{
    handle_add_command, handle_categories_command, handle_list_command, handle_show_command,
    AddArgs, ListArgs,
};
