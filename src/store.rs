//! Defines the record source boundary trait.

use crate::{
    Error,
    record::{OwnerId, Record},
};

/// Supplies the full record snapshot for an owner.
///
/// The production implementation lives with the persistence collaborator
/// outside this crate. Implementers must return every record the owner has
/// at snapshot time, with no duplicate IDs; the engine assumes the
/// snapshot is complete and recomputes its views from scratch on each
/// call. Create and delete requests also go directly to the collaborator,
/// after which callers fetch a fresh snapshot and re-run the analytics.
pub trait RecordSource {
    /// Retrieve all records belonging to `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::Source] if the snapshot could not be produced.
    fn records_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Record>, Error>;
}

/// A record source backed by an in-memory vector.
///
/// Useful for exercising the engine end-to-end without a real persistence
/// collaborator.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRecordSource {
    records: Vec<Record>,
}

impl InMemoryRecordSource {
    /// Create a source holding the given records, possibly spanning
    /// multiple owners.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn records_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Record>, Error> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.owner_id == *owner_id)
            .cloned()
            .collect())
    }
}
