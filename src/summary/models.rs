//! The derived view models for the dashboard and analytics pages.
//!
//! These types have no identity of their own: they are recomputed on every
//! [summarize](super::summarize) call, never persisted, and owned by the
//! caller that requested them.

use serde::Serialize;
use time::Date;

/// Expense total for one category with its share of all expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    /// The category label.
    pub category: String,
    /// Total spent in this category.
    pub amount: f64,
    /// This category's share of total expenses, 0-100.
    ///
    /// Zero when there are no expenses at all.
    pub percentage: f64,
}

/// Income and expense totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// The day, serialized as `yyyy-MM-dd`.
    pub date: Date,
    /// Total income on this day.
    pub income: f64,
    /// Total expenses on this day.
    pub expenses: f64,
}

/// Income, expense, and balance totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Full English month name, e.g. "January".
    pub month: String,
    /// The calendar year the month falls in.
    pub year: i32,
    /// Total income over the month.
    pub income: f64,
    /// Total expenses over the month.
    pub expenses: f64,
    /// Income minus expenses for the month.
    pub balance: f64,
}

/// Everything the dashboard and analytics pages derive from one transaction
/// listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all income amounts.
    pub total_income: f64,
    /// Sum of all expense amounts.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
    /// Total expenses spread over the reporting window's days.
    pub average_daily_spending: f64,
    /// Expense categories, largest first.
    pub category_breakdown: Vec<CategoryBucket>,
    /// Per-day totals for every day present in the input, earliest first.
    pub income_expense_trend: Vec<TrendPoint>,
    /// Per-month totals, ordered as the analytics page lists them.
    pub monthly_comparison: Vec<MonthSummary>,
}
