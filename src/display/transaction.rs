//! Transaction register formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{IndexedTransaction, RegisterPage};

use super::report::truncate;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl RegisterRow {
    fn new(entry: &IndexedTransaction, symbol: &str) -> Self {
        let txn = &entry.transaction;
        Self {
            number: entry.index + 1,
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: truncate(&txn.description, 32),
            category: txn.category.clone(),
            kind: txn.kind.to_string(),
            amount: txn.signed_amount().format_signed(symbol),
        }
    }
}

/// One register page with its totals and page position
///
/// Row numbers are snapshot positions, usable with `edit` and `delete`.
pub fn format_register(page: &RegisterPage, symbol: &str) -> String {
    if page.entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RegisterRow> = page
        .entries
        .iter()
        .map(|entry| RegisterRow::new(entry, symbol))
        .collect();
    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');

    let totals = &page.totals;
    output.push_str(&format!(
        "Page {} of {} ({} transactions)\n",
        page.page, page.total_pages, page.total_matches
    ));
    output.push_str(&format!(
        "Income: {}  Expenses: {}  Balance: {}\n",
        totals.income.format_with_symbol(symbol),
        totals.expenses.format_with_symbol(symbol),
        totals.balance().format_with_symbol(symbol)
    ));
    output
}
