// File: src/error.rs
// Purpose: Error types for schema construction, registration and submission

use crate::field::Field;
use thiserror::Error;

/// A string key that names none of the sign-up fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

/// A schema that does not declare exactly one rule per field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field `{0}` has more than one rule")]
    DuplicateRule(Field),

    #[error("field `{0}` has no rule")]
    MissingRule(Field),
}

/// Failure reported by a registration backend
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("registration rejected with status {status}")]
    Rejected { status: u16 },
}

/// Why a submit trigger was refused before anything ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a sign-up submission is already in flight")]
    InFlight,
}
