//! Transaction grouping and summing for summaries.
//!
//! Provides the helpers behind [summarize](super::summarize): totals split by
//! kind, expense totals grouped by category, and per-day and per-month
//! series.

use std::collections::HashMap;

use time::Date;

use crate::transaction::{Transaction, TransactionKind};

use super::models::{CategoryBucket, MonthSummary, TrendPoint};

/// Sums transaction amounts split into (income, expenses).
pub(super) fn income_expense_totals(transactions: &[Transaction]) -> (f64, f64) {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount,
        }
    }

    (income, expenses)
}

/// Groups expense amounts by category, largest first.
///
/// Income never contributes. Percentages are shares of `total_expenses`, and
/// all zero when `total_expenses` is zero.
pub(super) fn category_breakdown(
    transactions: &[Transaction],
    total_expenses: f64,
) -> Vec<CategoryBucket> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
    {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut buckets: Vec<CategoryBucket> = totals
        .into_iter()
        .map(|(category, amount)| CategoryBucket {
            category: category.to_owned(),
            amount,
            percentage: if total_expenses == 0.0 {
                0.0
            } else {
                amount / total_expenses * 100.0
            },
        })
        .collect();

    // Sort by amount, and then name to keep equal categories in a stable order
    buckets.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    buckets
}

/// Builds the per-day income/expense series, earliest day first.
///
/// One point per calendar day present in the input set.
pub(super) fn income_expense_trend(transactions: &[Transaction]) -> Vec<TrendPoint> {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let entry = totals.entry(transaction.date).or_insert((0.0, 0.0));
        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    let mut points: Vec<TrendPoint> = totals
        .into_iter()
        .map(|(date, (income, expenses))| TrendPoint {
            date,
            income,
            expenses,
        })
        .collect();
    points.sort_by_key(|point| point.date);

    points
}

/// Builds the per-month comparison series.
///
/// Years are listed newest first, but months run January to December inside
/// each year. The analytics page has always listed them this way, so the
/// ordering is kept as-is.
pub(super) fn monthly_comparison(transactions: &[Transaction]) -> Vec<MonthSummary> {
    let mut totals: HashMap<(i32, u8), (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), u8::from(transaction.date.month()));
        let entry = totals.entry(key).or_insert((0.0, 0.0));
        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    let mut months: Vec<_> = totals.into_iter().collect();
    months.sort_by(|((year_a, month_a), _), ((year_b, month_b), _)| {
        year_b.cmp(year_a).then(month_a.cmp(month_b))
    });

    months
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthSummary {
            month: month_name(month).to_owned(),
            year,
            income,
            expenses,
            balance: income - expenses,
        })
        .collect()
}

fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("month numbers come from a Date"),
    }
}
