//! Finsight is the analytics core of a personal finance tracking app.
//!
//! The surrounding application fetches transaction records from a remote API
//! and renders dashboards, expense lists, and charts. This crate owns the
//! layer in between: normalizing raw JSON payloads into one canonical
//! [Transaction] type, deriving the period [Summary] shown on the dashboard
//! and analytics pages, and filtering/paginating the flat transaction list
//! for the expenses page.
//!
//! Every derivation is a pure function over an in-memory slice. View state is
//! re-derived from the flat list on each call rather than kept in incremental
//! indices, so callers can invoke these functions repeatedly with changing
//! inputs from any thread, as long as they treat the input as a snapshot.

#![warn(missing_docs)]

mod format;
mod query;
mod summary;
mod transaction;

pub use format::currency;
pub use query::{PageMarker, TransactionPage, TransactionQuery, query_transactions};
pub use summary::{CategoryBucket, MonthSummary, Summary, TrendPoint, summarize};
pub use transaction::{
    ReportingWindow, Transaction, TransactionBuilder, TransactionKind, WindowPreset,
    transactions_from_str, transactions_from_value,
};

/// The errors that may occur while normalizing API payloads.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction date could not be parsed as a calendar date.
    ///
    /// Missing amounts and categories are recovered with defaults, but a
    /// record without a usable date cannot be placed on any trend or
    /// comparison, so the payload is rejected.
    ///
    /// Callers get the original parse error as a string alongside the date
    /// string that caused it.
    #[error("could not parse transaction date \"{1}\": {0}")]
    InvalidDate(String, String),

    /// The payload was valid JSON but not a recognized transaction listing.
    ///
    /// The server emits either a bare array of records or an envelope object
    /// carrying the records under `items`, `transactions`, or `data`.
    #[error("payload is not a transaction listing: {0}")]
    UnrecognizedPayload(String),

    /// The payload was not valid JSON.
    #[error("could not parse payload as JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidJson(value.to_string())
    }
}
