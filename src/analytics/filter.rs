//! Display filtering of record collections.

use serde::{Deserialize, Serialize};

use crate::record::{Category, Record, RecordKind};

use super::month::month_key;

/// The active criteria narrowing a displayed record collection.
///
/// Each criterion is independent and optional; `None` means no constraint.
/// Filtering exists purely for display: aggregation always runs over the
/// unfiltered snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep only records with exactly this category label.
    pub category: Option<Category>,
    /// Keep only records whose `occurred_on` falls in this `YYYY-MM` month.
    pub month: Option<String>,
    /// Keep only records of this kind.
    pub kind: Option<RecordKind>,
}

impl FilterConfig {
    /// Whether no criterion is set.
    ///
    /// The UI uses this to decide whether to offer a "clear filters"
    /// action.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.month.is_none() && self.kind.is_none()
    }

    /// Whether a record satisfies every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(category) = &self.category
            && record.category != *category
        {
            return false;
        }

        if let Some(month) = &self.month
            && month_key(record.occurred_on) != *month
        {
            return false;
        }

        if let Some(kind) = self.kind
            && record.kind != kind
        {
            return false;
        }

        true
    }

    /// Applies the filter, keeping matching records in their input order.
    ///
    /// With no criteria set this returns a copy equal to the input. The
    /// input is never mutated.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
