//! Transaction register
//!
//! Search, type filter, sorting and pagination over the transaction list.
//! Entries keep their snapshot position so edits and deletes hit the right
//! record.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

use super::dashboard::IndexedTransaction;
use super::totals::Totals;

/// Entries per page
pub const PAGE_SIZE: usize = 10;

/// Which transactions to include by type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind.is_income(),
            Self::Expense => kind.is_expense(),
        }
    }

    /// All -> Income -> Expense -> All
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => other.parse::<TransactionType>().map(|kind| match kind {
                TransactionType::Income => Self::Income,
                TransactionType::Expense => Self::Expense,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Self::Ascending => '↑',
            Self::Descending => '↓',
        }
    }
}

/// Register query state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub search: String,
    pub type_filter: TypeFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based; clamped when the query runs
    pub page: usize,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    /// Select a sort field
    ///
    /// Choosing the active field flips the order; a new field starts
    /// descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Descending;
        }
    }

    fn matches(&self, txn: &Transaction, needle: &str) -> bool {
        self.type_filter.matches(txn.kind) && txn.matches_search(needle)
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        let ordering = match self.sort_field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
        };
        match self.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Filter, sort and paginate `transactions`
    pub fn run(&self, transactions: &[Transaction]) -> RegisterPage {
        let needle = self.search.trim().to_lowercase();

        let mut matches: Vec<IndexedTransaction> = transactions
            .iter()
            .enumerate()
            .filter(|(_, txn)| self.matches(txn, &needle))
            .map(|(index, txn)| IndexedTransaction {
                index,
                transaction: txn.clone(),
            })
            .collect();
        matches.sort_by(|a, b| self.compare(&a.transaction, &b.transaction));

        let totals = Totals::from_transactions(matches.iter().map(|m| &m.transaction));
        let total_matches = matches.len();
        let total_pages = total_pages(total_matches);
        let page = clamp_page(self.page, total_pages);

        let entries = matches
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        RegisterPage {
            entries,
            page,
            total_pages,
            total_matches,
            totals,
        }
    }
}

/// ceil(n / PAGE_SIZE)
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page into `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of register results
#[derive(Debug, Clone)]
pub struct RegisterPage {
    pub entries: Vec<IndexedTransaction>,
    /// The page actually shown, after clamping
    pub page: usize,
    /// May be zero when nothing matched
    pub total_pages: usize,
    pub total_matches: usize,
    /// Over the whole filtered set, not just this page
    pub totals: Totals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::totals::tests::txn;

    fn sample() -> Vec<Transaction> {
        vec![
            txn("Weekly groceries", 5000, "Food", TransactionType::Expense, "2025-01-03"),
            txn("Paycheck", 200000, "Salary", TransactionType::Income, "2025-01-01"),
            txn("Rent", 90000, "Housing", TransactionType::Expense, "2025-01-02"),
            txn("Snack", 500, "food", TransactionType::Expense, "2025-01-05"),
        ]
    }

    fn descriptions(page: &RegisterPage) -> Vec<&str> {
        page.entries
            .iter()
            .map(|e| e.transaction.description.as_str())
            .collect()
    }

    #[test]
    fn test_default_sort_is_date_descending() {
        let page = TransactionQuery::new().run(&sample());
        assert_eq!(descriptions(&page), ["Snack", "Weekly groceries", "Rent", "Paycheck"]);
        assert_eq!(page.entries[0].index, 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let mut query = TransactionQuery::new();
        query.search = "FOOD".into();
        let page = query.run(&sample());
        assert_eq!(descriptions(&page), ["Snack", "Weekly groceries"]);

        query.search = "rent".into();
        assert_eq!(descriptions(&query.run(&sample())), ["Rent"]);
    }

    #[test]
    fn test_type_filter_and_filtered_totals() {
        let mut query = TransactionQuery::new();
        query.type_filter = TypeFilter::Income;
        let page = query.run(&sample());

        assert!(page.entries.iter().all(|e| e.transaction.is_income()));
        assert_eq!(page.totals.income, Money::from_cents(200000));
        assert!(page.totals.expenses.is_zero());

        query.type_filter = TypeFilter::Expense;
        let page = query.run(&sample());
        assert_eq!(page.totals.expenses, Money::from_cents(95500));
        assert_eq!(page.totals.balance(), Money::from_cents(-95500));
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = TransactionQuery::new();
        query.toggle_sort(SortField::Date);
        assert_eq!(query.sort_order, SortOrder::Ascending);

        query.toggle_sort(SortField::Amount);
        assert_eq!(query.sort_field, SortField::Amount);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert_eq!(descriptions(&query.run(&sample()))[0], "Paycheck");

        query.toggle_sort(SortField::Amount);
        assert_eq!(descriptions(&query.run(&sample()))[0], "Snack");
    }

    #[test]
    fn test_pagination_clamps_page() {
        let txns: Vec<_> = (0..23)
            .map(|i| txn(&format!("t{}", i), 100, "Food", TransactionType::Expense, "2025-01-01"))
            .collect();

        let mut query = TransactionQuery::new();
        query.page = 3;
        let page = query.run(&txns);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.entries.len(), 3);

        query.page = 99;
        assert_eq!(query.run(&txns).page, 3);

        query.page = 0;
        let page = query.run(&txns);
        assert_eq!(page.page, 1);
        assert_eq!(page.entries.len(), PAGE_SIZE);
        // Equal dates keep insertion order
        assert_eq!(page.entries[0].transaction.description, "t0");
    }

    #[test]
    fn test_empty_register() {
        let page = TransactionQuery::new().run(&[]);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.entries.is_empty());
    }

    #[test]
    fn test_type_filter_parsing() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!("Income".parse::<TypeFilter>(), Ok(TypeFilter::Income));
        assert!("transfer".parse::<TypeFilter>().is_err());
        assert_eq!(TypeFilter::Expense.cycle(), TypeFilter::All);
    }
}
