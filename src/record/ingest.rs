//! Parsing and validation of raw collaborator rows into records.
//!
//! The persistence collaborator hands over rows with string-typed dates,
//! timestamps, and kinds. Ingestion turns each row into a validated
//! [Record] or rejects it with a descriptive error. Rejection never drops a
//! record silently: the caller receives every rejection alongside the
//! records that passed, so aggregates are never quietly computed over a
//! partial collection.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::Error;

use super::{Category, OwnerId, Record, RecordId, RecordKind};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A raw transaction row as supplied by the persistence collaborator,
/// before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// The ID assigned by the persistence collaborator.
    pub id: String,
    /// The ID of the owning user.
    pub owner_id: String,
    /// The amount in minor currency units. Must be non-negative.
    pub amount: i64,
    /// The category label. Unknown labels are accepted as-is.
    pub category: String,
    /// `"Income"` or `"Expense"`.
    pub kind: String,
    /// The attributed calendar date, `YYYY-MM-DD`.
    pub occurred_on: String,
    /// A non-empty text description.
    pub description: String,
    /// The creation timestamp, RFC 3339.
    pub created_at: String,
}

impl RecordDraft {
    /// Validate the draft and build a [Record] from it.
    ///
    /// # Errors
    ///
    /// Returns the first data-model invariant the draft violates:
    /// - [Error::NegativeAmount] if `amount` is negative,
    /// - [Error::EmptyDescription] if `description` is empty,
    /// - [Error::EmptyCategory] if `category` is empty,
    /// - [Error::UnknownKind] if `kind` is not a valid variant,
    /// - [Error::InvalidDate] if `occurred_on` is not a valid calendar
    ///   date,
    /// - [Error::InvalidTimestamp] if `created_at` is not RFC 3339.
    pub fn validate(self) -> Result<Record, Error> {
        if self.amount < 0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        if self.description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let category = Category::new(&self.category)?;
        let kind: RecordKind = self.kind.parse()?;

        let occurred_on = Date::parse(&self.occurred_on, DATE_FORMAT)
            .map_err(|error| Error::InvalidDate(error.to_string(), self.occurred_on.clone()))?;

        let created_at = OffsetDateTime::parse(&self.created_at, &Rfc3339)
            .map_err(|error| Error::InvalidTimestamp(error.to_string(), self.created_at.clone()))?;

        Ok(Record {
            id: RecordId::new(self.id),
            owner_id: OwnerId::new(self.owner_id),
            amount: self.amount,
            category,
            kind,
            occurred_on,
            description: self.description,
            created_at,
        })
    }
}

/// A draft that failed validation, paired with the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedDraft {
    /// The collaborator-assigned ID of the offending row.
    pub id: String,
    /// Why the row was rejected.
    pub error: Error,
}

/// The result of ingesting a batch of drafts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestOutcome {
    /// Records that passed validation, in draft order.
    pub accepted: Vec<Record>,
    /// Rows that failed validation, in draft order.
    pub rejected: Vec<RejectedDraft>,
}

/// Validates a batch of drafts, keeping the valid records.
///
/// A bad row rejects only itself; the remaining rows are still processed.
/// Each rejection is also logged at WARN level. Use [ingest_strict] for
/// all-or-nothing behaviour.
pub fn ingest(drafts: Vec<RecordDraft>) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();

    for draft in drafts {
        let id = draft.id.clone();

        match draft.validate() {
            Ok(record) => outcome.accepted.push(record),
            Err(error) => {
                tracing::warn!(draft_id = %id, %error, "rejected record draft");
                outcome.rejected.push(RejectedDraft { id, error });
            }
        }
    }

    outcome
}

/// Validates a batch of drafts, aborting on the first invalid row.
///
/// # Errors
///
/// Returns the validation error of the first invalid draft. No records are
/// produced in that case.
pub fn ingest_strict(drafts: Vec<RecordDraft>) -> Result<Vec<Record>, Error> {
    drafts.into_iter().map(RecordDraft::validate).collect()
}
