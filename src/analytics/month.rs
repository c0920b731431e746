//! Canonical month-key extraction for time-series bucketing.

use time::Date;

/// Extracts the canonical `YYYY-MM` bucket key for a date.
///
/// Every month-grained grouping in the engine (time series, month filter,
/// derived month options) goes through this one function, so bucket keys
/// can never drift apart. Lexicographic ordering of the keys matches
/// chronological ordering.
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}
