// models/src/errors.rs
pub use thiserror::Error;

use crate::identifiers::RecordId;

/// Errors raised while turning raw form field input into a typed draft.
/// Each variant blocks submission and is rendered back to the user inline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("field '{field}' expects a number, got '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    #[error("invalid calendar date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("'{0}' is not a recognized gender")]
    UnknownGender(String),
    #[error("'{0}' is not a weekday name")]
    UnknownWeekday(String),
    #[error("'{0}' is not an appointment type")]
    UnknownAppointmentType(String),
    #[error("'{0}' is not an appointment status")]
    UnknownAppointmentStatus(String),
    #[error("'{0}' is not a valid record id")]
    MalformedId(String),
}

/// Errors surfaced by record store operations. Lookups over possibly
/// dangling references return `Option` instead; only operations that
/// target a record which must exist report through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordsError {
    #[error("no doctor with id {0}")]
    DoctorNotFound(RecordId),
    #[error("no patient with id {0}")]
    PatientNotFound(RecordId),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// A type alias for a `Result` that returns a `RecordsError` on failure.
pub type RecordsResult<T> = Result<T, RecordsError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
