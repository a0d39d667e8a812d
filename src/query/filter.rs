//! Text and date matching for transaction queries.

use time::Date;

use crate::transaction::Transaction;

/// Whether `transaction` matches the lowercased free-text `needle`.
///
/// Substring match across description, category, notes, every tag, and the
/// display form of the amount; a record matches if any field matches. An
/// empty needle matches everything.
pub(super) fn matches_text(transaction: &Transaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    transaction.description.to_lowercase().contains(needle)
        || transaction.category.to_lowercase().contains(needle)
        || transaction
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(needle))
        || transaction
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
        || transaction.amount_text().contains(needle)
}

/// Whether `transaction` falls inside the optional inclusive date range.
///
/// The source UI floors the start to midnight and ceilings the end to the
/// last millisecond of its day; with whole calendar days on the model this
/// reduces to plain inclusive comparison.
pub(super) fn matches_date_range(
    transaction: &Transaction,
    start: Option<Date>,
    end: Option<Date>,
) -> bool {
    if start.is_some_and(|start| transaction.date < start) {
        return false;
    }

    if end.is_some_and(|end| transaction.date > end) {
        return false;
    }

    true
}
