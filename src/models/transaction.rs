//! Transaction model
//!
//! An income or expense entry. Transactions carry no identifier of their own;
//! they are addressed by position and duplicates are allowed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// The other type
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,

    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with the sign implied by the type (income positive)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Case-insensitive substring match on description or category
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }

    /// One-line summary, amounts in `symbol`
    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.signed_amount().format_signed(symbol)
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("$"))
    }
}
