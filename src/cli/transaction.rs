//! Transaction CLI commands
//!
//! Adding, listing and browsing the categories transactions can use.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Money, TransactionKind};
use crate::reports::{net_balance, total_by_kind};
use crate::services::validation::DATE_FORMAT;
use crate::services::{validate_transaction_input, Ledger, TransactionFilter, TransactionInput};

/// Arguments for `add`
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Transaction kind: income or expense
    #[arg(short, long)]
    pub kind: String,
    /// Amount (e.g., "430" or "430.00")
    #[arg(short, long)]
    pub amount: Option<String>,
    /// Category name (see `fintrack categories`)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only this kind: income or expense
    #[arg(short, long)]
    pub kind: Option<String>,
    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Validate and add a transaction to the session ledger
///
/// A rejected candidate surfaces as `FintrackError::InvalidTransaction`
/// carrying every reason.
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
) -> FintrackResult<()> {
    let kind = parse_kind(&args.kind)?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().format(DATE_FORMAT).to_string());

    let input = TransactionInput::new(
        kind,
        args.amount.unwrap_or_default(),
        args.category.unwrap_or_default(),
        date,
    )
    .description(args.description.unwrap_or_default());

    let valid = validate_transaction_input(&input)?;
    let txn = ledger.add(valid);

    println!("Added transaction:");
    print!("{}", format_transaction_details(txn, settings));
    println!();

    let snapshot = ledger.transactions();
    let symbol = settings.currency_symbol.as_str();
    println!(
        "Total income:   {}",
        total_by_kind(snapshot, TransactionKind::Income).format_with_symbol(symbol)
    );
    println!(
        "Total expenses: {}",
        total_by_kind(snapshot, TransactionKind::Expense).format_with_symbol(symbol)
    );
    println!(
        "Net balance:    {}",
        net_balance(snapshot).format_with_symbol(symbol)
    );

    Ok(())
}

/// List transactions, newest first
pub fn handle_list_command(ledger: &Ledger, settings: &Settings, args: ListArgs) -> FintrackResult<()> {
    let kind = args.kind.as_deref().map(parse_kind).transpose()?;

    let mut filter = TransactionFilter::new();
    if let Some(kind) = kind {
        filter = filter.kind(kind);
    }
    if let Some(name) = args.category.as_deref() {
        filter = filter.category(resolve_category(kind, name)?);
    }
    if let Some(from) = args.from.as_deref() {
        filter = filter.from(parse_date(from, "start")?);
    }
    if let Some(to) = args.to.as_deref() {
        filter = filter.to(parse_date(to, "end")?);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    let transactions = ledger.filter(&filter);
    print!("{}", format_transaction_register(&transactions, settings));
    Ok(())
}

/// Show one transaction by reference (`txn-1a2b3c4d`, a short prefix, or a full UUID)
pub fn handle_show_command(ledger: &Ledger, settings: &Settings, reference: &str) -> FintrackResult<()> {
    let txn = ledger.find(reference)?;
    print!("{}", format_transaction_details(txn, settings));
    Ok(())
}

/// Print the allowed categories and quick amounts for each kind
pub fn handle_categories_command(settings: &Settings) -> FintrackResult<()> {
    for kind in TransactionKind::all() {
        println!("{} categories:", kind);
        for category in Category::all_for(*kind) {
            println!("  {}", category);
        }

        let quick: Vec<String> = kind
            .quick_amounts()
            .iter()
            .map(|units| Money::from_units(*units).format_with_symbol(&settings.currency_symbol))
            .collect();
        println!("  Quick amounts: {}", quick.join(", "));
        println!();
    }
    Ok(())
}

fn parse_kind(name: &str) -> FintrackResult<TransactionKind> {
    TransactionKind::from_name(name).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Unknown transaction kind '{}'. Use 'income' or 'expense'",
            name
        ))
    })
}

fn parse_date(value: &str, which: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        FintrackError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            which, value
        ))
    })
}

/// Resolve a category name, using the kind when given
///
/// Without a kind the name must belong to exactly one kind; "Other" exists
/// for both and needs `--kind`.
fn resolve_category(kind: Option<TransactionKind>, name: &str) -> FintrackResult<Category> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => TransactionKind::all().to_vec(),
    };

    let candidates: Vec<Category> = kinds
        .into_iter()
        .filter_map(|k| Category::parse(k, name))
        .collect();

    match candidates.as_slice() {
        [category] => Ok(*category),
        [] => Err(FintrackError::NotFound {
            entity_type: "Category",
            identifier: name.to_string(),
        }),
        _ => Err(FintrackError::Validation(format!(
            "Category '{}' exists for both kinds; add --kind",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};

    #[test]
    fn test_resolve_category() {
        assert_eq!(
            resolve_category(None, "rent").unwrap(),
            Category::Expense(ExpenseCategory::Rent)
        );
        assert_eq!(
            resolve_category(Some(TransactionKind::Income), "Other").unwrap(),
            Category::Income(IncomeCategory::Other)
        );
        assert!(resolve_category(None, "Other").unwrap_err().is_validation());
        assert!(resolve_category(None, "Lottery").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_valid() {
        let mut ledger = Ledger::new();
        let args = AddArgs {
            kind: "expense".into(),
            amount: Some("430".into()),
            category: Some("Shopping".into()),
            date: Some("2025-02-17".into()),
            description: None,
        };

        handle_add_command(&mut ledger, &Settings::default(), args).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].amount, Money::from_units(430));
    }

    #[test]
    fn test_add_invalid_reports_all_reasons() {
        let mut ledger = Ledger::new();
        let args = AddArgs {
            kind: "income".into(),
            amount: None,
            category: Some("Rent".into()),
            date: Some("2025-02-30".into()),
            description: None,
        };

        let err = handle_add_command(&mut ledger, &Settings::default(), args).unwrap_err();
        match err {
            FintrackError::InvalidTransaction(invalid) => assert_eq!(invalid.reasons.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_show_resolves_reference() {
        let ledger = crate::sample::sample_ledger().unwrap();
        let settings = Settings::default();
        let id = ledger.transactions()[0].id;

        handle_show_command(&ledger, &settings, &id.to_string()).unwrap();
        handle_show_command(&ledger, &settings, &id.as_uuid().to_string()).unwrap();
        assert!(handle_show_command(&ledger, &settings, "txn-zzzzzzzz")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_unknown_kind() {
        let mut ledger = Ledger::new();
        let args = AddArgs {
            kind: "transfer".into(),
            ..AddArgs::default()
        };
        assert!(handle_add_command(&mut ledger, &Settings::default(), args)
            .unwrap_err()
            .is_validation());
    }
}
