//! Income and expense categories
//!
//! Each transaction kind has its own closed set of categories. The sets are
//! separate types, so an expense can never carry an income category. The
//! declaration order of each enum is the enumeration order used for
//! deterministic tie-breaking and for report ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::TransactionKind;

/// Categories available to income transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Gift,
    Bonus,
    Other,
}

impl IncomeCategory {
    /// All income categories in enumeration order
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Freelance,
            Self::Investment,
            Self::Gift,
            Self::Bonus,
            Self::Other,
        ]
    }

    /// Display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Gift => "Gift",
            Self::Bonus => "Bonus",
            Self::Other => "Other",
        }
    }

    /// Look up a category by name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// Categories available to expense transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Food,
    Transport,
    Entertainment,
    Healthcare,
    Shopping,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All expense categories in enumeration order
    pub fn all() -> &'static [Self] {
        &[
            Self::Rent,
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Look up a category by name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// A category tagged with the kind it belongs to
///
/// Ordering follows enumeration order: all income categories first, then all
/// expense categories, each in their declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "lowercase")]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    /// The transaction kind this category belongs to
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    /// Display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income(c) => c.name(),
            Self::Expense(c) => c.name(),
        }
    }

    /// Resolve a category name within the allowed set for `kind`
    pub fn parse(kind: TransactionKind, name: &str) -> Option<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::from_name(name).map(Self::Income),
            TransactionKind::Expense => ExpenseCategory::from_name(name).map(Self::Expense),
        }
    }

    /// All categories allowed for `kind`, in enumeration order
    pub fn all_for(kind: TransactionKind) -> Vec<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::all()
                .iter()
                .copied()
                .map(Self::Income)
                .collect(),
            TransactionKind::Expense => ExpenseCategory::all()
                .iter()
                .copied()
                .map(Self::Expense)
                .collect(),
        }
    }
}

impl From<IncomeCategory> for Category {
    fn from(category: IncomeCategory) -> Self {
        Self::Income(category)
    }
}

impl From<ExpenseCategory> for Category {
    fn from(category: ExpenseCategory) -> Self {
        Self::Expense(category)
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
