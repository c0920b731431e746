//! The transaction record model.
//!
//! This module contains everything related to individual records:
//! - The immutable [Record] model with its typed identifiers and kind
//! - The [Category] label and the known-label set
//! - Ingestion of raw collaborator rows into validated records

mod category;
mod core;
mod ingest;

pub use category::{Category, KNOWN_CATEGORIES};
pub use core::{OwnerId, Record, RecordId, RecordKind, sorted_by_recency};
pub use ingest::{IngestOutcome, RecordDraft, RejectedDraft, ingest, ingest_strict};
