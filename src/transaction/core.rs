//! Defines the canonical transaction model shared by every page.

use serde::{Deserialize, Serialize};
use time::Date;

/// The category label used when the server did not provide one.
pub(crate) const FALLBACK_CATEGORY: &str = "other";

/// Whether money moved into or out of the account.
///
/// The remote API tags each record as `"income"` or `"expense"`, and every
/// aggregate in this crate partitions on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The label shown in the expenses table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// A single income or expense record, i.e. an event where money was either
/// earned or spent.
///
/// Instances come from [normalization](crate::transactions_from_value) at the
/// API boundary, or from [Transaction::build] in code. `amount` is always
/// non-negative; the direction of the money is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The record ID assigned by the server.
    pub id: String,
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money earned or spent. Never negative.
    pub amount: f64,
    /// The category the transaction belongs to, e.g. "food", "transport".
    ///
    /// `"other"` when the server did not provide one.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The calendar day the money moved.
    pub date: Date,
    /// The member of a shared ledger who owns this transaction.
    pub user_id: Option<String>,
    /// Free-form notes attached by the user.
    pub notes: Option<String>,
    /// User-assigned tags.
    pub tags: Vec<String>,
    /// Link to an uploaded receipt. Carried through, never interpreted.
    pub attachment_url: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(kind: TransactionKind, amount: f64, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            id: String::new(),
            kind,
            amount,
            category: FALLBACK_CATEGORY.to_owned(),
            description: String::new(),
            date,
            user_id: None,
            notes: None,
            tags: Vec::new(),
            attachment_url: None,
        }
    }

    /// The display form of the amount, as rendered in the expenses table.
    ///
    /// The text filter matches against this, so searching "300" finds a
    /// $300.00 transaction.
    pub fn amount_text(&self) -> String {
        format!("{}", self.amount)
    }
}

/// A builder for creating [Transaction] instances outside the API boundary.
///
/// Optional fields default to empty, and the category defaults to `"other"`.
/// Call [TransactionBuilder::finish] to produce the [Transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    id: String,
    kind: TransactionKind,
    amount: f64,
    category: String,
    description: String,
    date: Date,
    user_id: Option<String>,
    notes: Option<String>,
    tags: Vec<String>,
    attachment_url: Option<String>,
}

impl TransactionBuilder {
    /// Set the record ID.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_owned();
        self
    }

    /// Set the category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the owner in a shared ledger.
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_owned());
        self
    }

    /// Set the free-form notes.
    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_owned());
        self
    }

    /// Set the user-assigned tags.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| (*tag).to_owned()).collect();
        self
    }

    /// Set the receipt link.
    pub fn attachment_url(mut self, attachment_url: &str) -> Self {
        self.attachment_url = Some(attachment_url.to_owned());
        self
    }

    /// Build the transaction.
    ///
    /// A negative amount is folded to its absolute value, keeping the
    /// declared kind, so the non-negative invariant holds everywhere
    /// downstream.
    pub fn finish(self) -> Transaction {
        Transaction {
            id: self.id,
            kind: self.kind,
            amount: self.amount.abs(),
            category: self.category,
            description: self.description,
            date: self.date,
            user_id: self.user_id,
            notes: self.notes,
            tags: self.tags,
            attachment_url: self.attachment_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{Transaction, TransactionKind};

    #[test]
    fn build_defaults_optional_fields() {
        let got = Transaction::build(TransactionKind::Expense, 12.5, date!(2024 - 01 - 05)).finish();

        assert_eq!(got.id, "");
        assert_eq!(got.category, "other");
        assert_eq!(got.description, "");
        assert_eq!(got.user_id, None);
        assert_eq!(got.notes, None);
        assert!(got.tags.is_empty());
        assert_eq!(got.attachment_url, None);
    }

    #[test]
    fn finish_folds_negative_amounts() {
        let got = Transaction::build(TransactionKind::Expense, -42.0, date!(2024 - 01 - 05)).finish();

        assert_eq!(got.amount, 42.0);
        assert_eq!(got.kind, TransactionKind::Expense);
    }

    #[test]
    fn amount_text_matches_display_form() {
        let whole = Transaction::build(TransactionKind::Expense, 300.0, date!(2024 - 01 - 05)).finish();
        let fractional =
            Transaction::build(TransactionKind::Expense, 300.5, date!(2024 - 01 - 05)).finish();

        assert_eq!(whole.amount_text(), "300");
        assert_eq!(fractional.amount_text(), "300.5");
    }
}
