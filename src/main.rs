use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_add_command, handle_categories_command, handle_dashboard_command,
    handle_history_command, handle_kind_command, handle_list_command, handle_show_command,
    AddArgs, ListArgs,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::models::TransactionKind;
use fintrack::sample::sample_ledger;
use fintrack::services::Ledger;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal finance tracker",
    long_about = "fintrack records income and expenses and summarizes them: \
                  totals, net balance, spending by category and a monthly \
                  history, all from the command line."
)]
struct Cli {
    /// Start from an empty ledger instead of the sample data
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Totals, top categories, recent transactions and monthly trend
    #[command(alias = "dash")]
    Dashboard,

    /// Income overview by category
    Income,

    /// Expense overview by category
    Expenses,

    /// Month-by-month history with performance ratings
    History {
        /// Only show this year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List transactions
    List(ListArgs),

    /// Show one transaction
    Show {
        /// Transaction reference (e.g., txn-1a2b3c4d)
        reference: String,
    },

    /// Add a transaction
    Add(AddArgs),

    /// Show allowed categories and quick amounts
    Categories,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut ledger = if cli.empty {
        Ledger::new()
    } else {
        sample_ledger()?
    };
    log::debug!("Session ledger holds {} transactions", ledger.len());

    match cli.command {
        Some(Commands::Dashboard) => handle_dashboard_command(&ledger, &settings)?,
        Some(Commands::Income) => handle_kind_command(&ledger, &settings, TransactionKind::Income)?,
        Some(Commands::Expenses) => {
            handle_kind_command(&ledger, &settings, TransactionKind::Expense)?
        }
        Some(Commands::History { year }) => handle_history_command(&ledger, &settings, year)?,
        Some(Commands::List(args)) => handle_list_command(&ledger, &settings, args)?,
        Some(Commands::Show { reference }) => {
            handle_show_command(&ledger, &settings, &reference)?
        }
        Some(Commands::Add(args)) => handle_add_command(&mut ledger, &settings, args)?,
        Some(Commands::Categories) => handle_categories_command(&settings)?,
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Trend months:    {}", settings.trend_months);
            println!("  Bar width:       {}", settings.bar_width);
        }
        None => {
            println!("fintrack - Terminal personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for an overview.");
        }
    }

    Ok(())
}
