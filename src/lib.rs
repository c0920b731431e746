//! Spendsight is the analytics core of a personal finance tracker.
//!
//! Given a snapshot of a user's income and expense records, this library
//! computes category-wise expense totals, a sparse monthly income/expense
//! time series, and the overall balance; narrows the displayed records
//! with composable filter criteria; derives the filter choices actually
//! present in the data; and formats amounts and dates for display.
//!
//! Everything is a pure function over immutable snapshots. Persistence,
//! authentication, and rendering live in the embedding application; the
//! only seam to them is the [RecordSource] trait and the
//! [record::RecordDraft] row shape.

#![warn(missing_docs)]

pub mod analytics;
mod error;
mod format;
pub mod record;
mod store;

pub use error::Error;
pub use format::{CurrencyStyle, DateStyle, format_currency, format_date};
pub use store::{InMemoryRecordSource, RecordSource};
