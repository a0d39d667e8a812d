//! Summary derivation for the dashboard and analytics pages.
//!
//! Takes a flat transaction listing and a reporting window and produces
//! everything those pages render: headline totals, the category breakdown,
//! the per-day trend, and the per-month comparison.

mod aggregation;
mod models;

pub use models::{CategoryBucket, MonthSummary, Summary, TrendPoint};

use crate::transaction::{ReportingWindow, Transaction};

use aggregation::{
    category_breakdown, income_expense_totals, income_expense_trend, monthly_comparison,
};

/// Derive the full [Summary] for a transaction listing.
///
/// Pure and synchronous: the input is treated as a snapshot and never
/// mutated, and identical inputs produce identical summaries. The window only
/// scales [Summary::average_daily_spending]; callers wanting a windowed
/// report filter the slice first with [crate::query_transactions].
///
/// An empty listing yields the all-zero summary with empty collections.
pub fn summarize(transactions: &[Transaction], window: ReportingWindow) -> Summary {
    let (total_income, total_expenses) = income_expense_totals(transactions);

    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        average_daily_spending: total_expenses / window.day_count() as f64,
        category_breakdown: category_breakdown(transactions, total_expenses),
        income_expense_trend: income_expense_trend(transactions),
        monthly_comparison: monthly_comparison(transactions),
    }
}
