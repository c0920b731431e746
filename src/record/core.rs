//! Defines the core transaction record model.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Error;

use super::Category;

/// The ID of a transaction record, assigned by the persistence
/// collaborator.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an opaque identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ID of the user that owns a set of transaction records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wrap an opaque identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a record represents money earned or money spent.
///
/// The kind determines the sign applied when computing the balance; amounts
/// themselves are always non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Money flowing in, e.g. salary or freelance payments.
    Income,
    /// Money flowing out, e.g. groceries or rent.
    Expense,
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(Error::UnknownKind(other.to_owned())),
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// An income or expense transaction, i.e. an event where money was either
/// earned or spent.
///
/// Records are immutable snapshots owned by the persistence collaborator;
/// edits are modelled there as delete plus insert. The engine only ever
/// borrows records and returns new derived structures. To build a record
/// from raw collaborator data, use [crate::record::ingest].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The ID of the record.
    pub id: RecordId,
    /// The ID of the user the record belongs to.
    pub owner_id: OwnerId,
    /// The amount of money earned or spent, in minor currency units
    /// (e.g. paise or cents). Always non-negative; direction is carried by
    /// `kind`.
    pub amount: i64,
    /// The category of the record, e.g. "Grocery", "Salary".
    pub category: Category,
    /// Whether the record is income or an expense.
    pub kind: RecordKind,
    /// The calendar date the transaction is attributed to. This is the sole
    /// grouping key for time-series bucketing.
    pub occurred_on: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the record was created. Used only for recency ordering, never
    /// for bucketing.
    pub created_at: OffsetDateTime,
}

/// Orders records newest-first by creation time, the default listing order.
///
/// Creation-time ties are broken by record ID so the ordering is
/// deterministic across calls.
pub fn sorted_by_recency(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}
