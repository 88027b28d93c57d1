use thiserror::Error;

/// Which rule produced a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The value was empty.
    NotEmpty,
    /// The value is not a valid email address.
    Email,
    /// The value has fewer characters than required.
    MinLength(usize),
    /// The value has more characters than allowed.
    MaxLength(usize),
    /// The value does not match a regular expression.
    Pattern,
    /// A caller-supplied rule failed.
    Custom,
}

/// A user-facing validation failure: a classification plus the message shown
/// in place of the field's hint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    /// Create an error of the given kind.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an error for a caller-supplied rule.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::Custom, message)
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
