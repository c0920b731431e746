//! Derivation of the filter choices offered to the user.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{Category, Record};

use super::month::month_key;

/// The category and month values available to [super::FilterConfig].
///
/// Both sets are derived from the full snapshot, so the UI never offers a
/// choice that would match nothing and never omits a value that is present
/// in the data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterChoices {
    /// Distinct category labels present, sorted ascending.
    pub categories: Vec<Category>,
    /// Distinct `YYYY-MM` month keys present, sorted descending so the
    /// most recent data is listed first.
    pub months: Vec<String>,
}

/// Collects the distinct categories and months present in a snapshot.
pub fn filter_choices(records: &[Record]) -> FilterChoices {
    let mut categories = BTreeSet::new();
    let mut months = BTreeSet::new();

    for record in records {
        categories.insert(record.category.clone());
        months.insert(month_key(record.occurred_on));
    }

    FilterChoices {
        categories: categories.into_iter().collect(),
        months: months.into_iter().rev().collect(),
    }
}
