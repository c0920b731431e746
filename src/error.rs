//! Defines the crate-wide error type.

use thiserror::Error;

/// The errors that may occur while ingesting or presenting transaction
/// records.
///
/// The engine never suppresses these internally; every failure is returned
/// to the calling application layer, which decides the user-facing
/// behaviour.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative amount was used to create a record.
    ///
    /// Amounts are unsigned quantities in minor currency units; the
    /// direction of the money flow is carried by the record kind instead of
    /// the sign.
    #[error("amount must not be negative, got {0} minor units")]
    NegativeAmount(i64),

    /// An empty string was used as a record description.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// An empty string was used as a category label.
    #[error("category label cannot be empty")]
    EmptyCategory,

    /// A record kind other than `Income` or `Expense` was supplied.
    #[error("\"{0}\" is not a valid record kind, expected \"Income\" or \"Expense\"")]
    UnknownKind(String),

    /// The occurrence date of a record could not be parsed as a calendar
    /// date.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not parse occurrence date \"{1}\": {0}")]
    InvalidDate(String, String),

    /// The creation timestamp of a record could not be parsed.
    #[error("could not parse creation timestamp \"{1}\": {0}")]
    InvalidTimestamp(String, String),

    /// An amount or date could not be rendered as a display string.
    ///
    /// This is propagated rather than coerced to a blank string so that
    /// data-quality problems in upstream records stay visible.
    #[error("could not format value for display: {0}")]
    FormattingFailure(String),

    /// The record source collaborator failed to produce a snapshot.
    #[error("record source failure: {0}")]
    Source(String),
}
