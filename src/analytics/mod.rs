//! Analytics over record snapshots.
//!
//! Provides the summary and trend aggregations, the display filter, and
//! the derived filter choices. Everything here is a pure function over a
//! borrowed snapshot; nothing holds state between calls, so the functions
//! are safe to call concurrently and are re-run in full after every
//! mutation at the persistence collaborator.

mod aggregation;
mod filter;
mod month;
mod options;

pub use aggregation::{MonthlySummary, Totals, category_totals, monthly_series, totals};
pub use filter::FilterConfig;
pub use month::month_key;
pub use options::{FilterChoices, filter_choices};
