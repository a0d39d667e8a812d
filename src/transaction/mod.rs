//! The canonical transaction model and everything that produces it.
//!
//! This module contains:
//! - The [Transaction] model and [TransactionBuilder] for creating
//!   transactions in code
//! - Normalization of remote API payloads into canonical transactions
//! - Reporting windows for scoping dashboard and analytics reports

mod core;
mod normalize;
mod window;

pub use self::core::{Transaction, TransactionBuilder, TransactionKind};
pub use normalize::{transactions_from_str, transactions_from_value};
pub use window::{ReportingWindow, WindowPreset};

pub(crate) use self::core::FALLBACK_CATEGORY;
