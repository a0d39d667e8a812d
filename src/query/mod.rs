//! Filtering and pagination for the expenses page.
//!
//! The page re-derives its view from the flat transaction list on every state
//! change: the full list stays in memory, and this module answers "which
//! records match, and which slice of them is on screen".

mod filter;
mod page;

pub use page::{PageMarker, TransactionPage};

use serde::Deserialize;
use time::Date;

use crate::transaction::Transaction;

use filter::{matches_date_range, matches_text};

/// The filter and paging parameters the expenses page sends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransactionQuery {
    /// Free-text search across description, category, notes, tags, and the
    /// display form of the amount. `None` or whitespace matches everything.
    pub text: Option<String>,
    /// Earliest calendar day to include, inclusive.
    pub start_date: Option<Date>,
    /// Latest calendar day to include, inclusive.
    pub end_date: Option<Date>,
    /// 1-indexed page to return. Zero is treated as one.
    pub page: u64,
    /// Transactions per page. Zero is treated as one.
    pub page_size: u64,
}

impl Default for TransactionQuery {
    /// The first page of twenty with no filters, the state the expenses page
    /// opens with.
    fn default() -> Self {
        Self {
            text: None,
            start_date: None,
            end_date: None,
            page: 1,
            page_size: 20,
        }
    }
}

/// Run `query` against a transaction listing.
///
/// Matching is described on [TransactionQuery]. The input is never mutated or
/// reordered; matching records keep their input order, since the API already
/// returns them presorted. An out-of-range page yields an empty items list
/// with correct totals rather than an error.
pub fn query_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> TransactionPage {
    let needle = query
        .text
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let matches: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| matches_text(transaction, &needle))
        .filter(|transaction| matches_date_range(transaction, query.start_date, query.end_date))
        .cloned()
        .collect();

    TransactionPage::assemble(matches, query.page, query.page_size)
}
