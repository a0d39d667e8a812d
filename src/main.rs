//! Command line reports over a transaction export from the Finsight API.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use time::{Date, macros::format_description};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use finsight::{
    ReportingWindow, Transaction, TransactionQuery, WindowPreset, currency, query_transactions,
    summarize, transactions_from_str,
};

/// Print period reports or search a JSON transaction export.
#[derive(Debug, Parser)]
#[command(name = "finsight", version, about)]
struct Cli {
    /// Path to a JSON transaction export.
    export: PathBuf,

    /// The reporting window preset.
    #[arg(long, value_enum, default_value = "month")]
    window: WindowArg,

    /// Anchor day for the window (yyyy-MM-dd). Defaults to the latest
    /// transaction date in the export.
    #[arg(long)]
    anchor: Option<String>,

    /// Print matching transactions instead of the period report.
    #[arg(long)]
    search: Option<String>,

    /// Page of search results to show.
    #[arg(long, default_value_t = 1)]
    page: u64,

    /// Search results per page.
    #[arg(long, default_value_t = 20)]
    page_size: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindowArg {
    Week,
    Month,
    Year,
}

impl From<WindowArg> for WindowPreset {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Week => WindowPreset::Week,
            WindowArg::Month => WindowPreset::Month,
            WindowArg::Year => WindowPreset::Year,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
        )
        .init();

    let cli = Cli::parse();

    let payload = fs::read_to_string(&cli.export)
        .with_context(|| format!("could not read export {}", cli.export.display()))?;
    let transactions = transactions_from_str(&payload)
        .with_context(|| format!("could not parse export {}", cli.export.display()))?;

    if let Some(text) = cli.search {
        print_search(&transactions, text, cli.page, cli.page_size);
        return Ok(());
    }

    let anchor = match cli.anchor {
        Some(anchor) => parse_anchor(&anchor)?,
        None => latest_date(&transactions)
            .context("export has no transactions to anchor the window on")?,
    };
    let window = WindowPreset::from(cli.window).window_for(anchor);

    print_report(&transactions, window);
    Ok(())
}

fn parse_anchor(value: &str) -> Result<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid anchor date '{value}', expected yyyy-MM-dd"))
}

fn latest_date(transactions: &[Transaction]) -> Option<Date> {
    transactions.iter().map(|transaction| transaction.date).max()
}

fn print_report(transactions: &[Transaction], window: ReportingWindow) {
    let in_window = query_transactions(
        transactions,
        &TransactionQuery {
            start_date: Some(window.start),
            end_date: Some(window.end),
            page_size: transactions.len().max(1) as u64,
            ..TransactionQuery::default()
        },
    );
    let summary = summarize(&in_window.items, window);

    println!("Report for {} to {}", window.start, window.end);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Balance", "Avg daily spend"],
            vec![vec![
                currency(summary.total_income),
                currency(summary.total_expenses),
                currency(summary.balance),
                currency(summary.average_daily_spending),
            ]],
        )
    );

    if !summary.category_breakdown.is_empty() {
        println!("\nSpending by category");
        let rows = summary
            .category_breakdown
            .iter()
            .map(|bucket| {
                vec![
                    bucket.category.clone(),
                    currency(bucket.amount),
                    format!("{:.1}%", bucket.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }

    if !summary.monthly_comparison.is_empty() {
        println!("\nMonthly comparison");
        let rows = summary
            .monthly_comparison
            .iter()
            .map(|month| {
                vec![
                    format!("{} {}", month.month, month.year),
                    currency(month.income),
                    currency(month.expenses),
                    currency(month.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Balance"], rows)
        );
    }
}

fn print_search(transactions: &[Transaction], text: String, page: u64, page_size: u64) {
    let results = query_transactions(
        transactions,
        &TransactionQuery {
            text: Some(text),
            page,
            page_size,
            ..TransactionQuery::default()
        },
    );

    let rows = results
        .items
        .iter()
        .map(|transaction| {
            vec![
                transaction.date.to_string(),
                transaction.kind.label().to_owned(),
                currency(transaction.amount),
                transaction.category.clone(),
                transaction.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Kind", "Amount", "Category", "Description"], rows)
    );
    println!(
        "Page {} of {} ({} matching)",
        results.page, results.total_pages, results.total_items
    );
}

fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.iter().map(|header| Cell::new(header)));

    for row in rows {
        table.add_row(row.into_iter().map(Cell::new));
    }

    table
}
