//! Error types for form operations.
//!
//! Validation failures are *not* errors of the form API; they are values
//! stored on each field (see [`crate::validation::ValidationError`]).
//! `FormError` only covers misuse the core can detect without panicking.

use thiserror::Error;

use crate::form::{ButtonId, FieldId};

/// Errors returned by [`crate::form::Form`] and the field kinds.
#[derive(Debug, Error)]
pub enum FormError {
    /// The id does not belong to this form.
    #[error("no field with id {0}")]
    UnknownField(FieldId),

    /// The id does not belong to this form.
    #[error("no button with id {0}")]
    UnknownButton(ButtonId),

    /// A select field was given a value outside its option list.
    #[error("'{option}' is not an option of field '{field}'")]
    UnknownOption {
        /// Label of the select field.
        field: String,
        /// The rejected value.
        option: String,
    },

    /// A pattern validator was built from an invalid regular expression.
    #[error("invalid validation pattern '{pattern}'")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A kind-specific operation was called on a field of another kind.
    #[error("field {field} is not a {expected} field")]
    KindMismatch {
        /// The targeted field.
        field: FieldId,
        /// What the operation needed (e.g. "text-like", "select").
        expected: &'static str,
    },
}

/// Result alias used across the crate.
pub type FormResult<T> = Result<T, FormError>;
