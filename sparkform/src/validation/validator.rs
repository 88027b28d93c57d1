//! Composable string validators.

use std::fmt;
use std::sync::Arc;

use email_address::EmailAddress;
use regex::Regex;

use super::error::{ValidationError, ValidationErrorKind};
use super::messages::ValidationMessages;
use crate::error::{FormError, FormResult};

/// Type alias for the shared rule closure.
type Rule = Arc<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// A pure validation rule over a field's text.
///
/// Cloning is cheap; clones share the same rule. Rules must be total
/// functions: a rule that panics is a caller bug and is not caught.
#[derive(Clone)]
pub struct Validator {
    rule: Rule,
}

impl Validator {
    /// Wrap a custom rule.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self { rule: Arc::new(f) }
    }

    /// Build a rule from a predicate and the message to report when it fails.
    pub fn rule<F>(check: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        Self::new(move |value| {
            if check(value) {
                Ok(())
            } else {
                Err(ValidationError::custom(msg.clone()))
            }
        })
    }

    /// Run the rule.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        (self.rule)(value)
    }

    /// Combine validators with fail-fast AND semantics.
    ///
    /// Sub-validators run in the given order; the first error is returned
    /// and the rest are skipped. An empty group always succeeds.
    pub fn group(validators: impl IntoIterator<Item = Validator>) -> Self {
        let validators: Vec<Validator> = validators.into_iter().collect();
        Self::new(move |value| {
            for validator in &validators {
                validator.validate(value)?;
            }
            Ok(())
        })
    }

    /// Chain another validator after this one (same semantics as [`Self::group`]).
    pub fn and(self, next: Validator) -> Self {
        Self::group([self, next])
    }

    /// Fail when the value is the empty string.
    pub fn not_empty(messages: &ValidationMessages) -> Self {
        let msg = messages.not_empty.clone();
        Self::new(move |value| {
            if value.is_empty() {
                Err(ValidationError::new(ValidationErrorKind::NotEmpty, msg.clone()))
            } else {
                Ok(())
            }
        })
    }

    /// Fail when the value is not a valid email address.
    ///
    /// The empty string is not a valid address.
    pub fn email(messages: &ValidationMessages) -> Self {
        let msg = messages.email.clone();
        Self::new(move |value| {
            if EmailAddress::is_valid(value) {
                Ok(())
            } else {
                Err(ValidationError::new(ValidationErrorKind::Email, msg.clone()))
            }
        })
    }

    /// Fail when the value has fewer than `min` characters.
    pub fn min_length(min: usize, messages: &ValidationMessages) -> Self {
        let msg = messages.min_length_message(min);
        Self::new(move |value| {
            if value.chars().count() < min {
                Err(ValidationError::new(
                    ValidationErrorKind::MinLength(min),
                    msg.clone(),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fail when the value has more than `max` characters.
    pub fn max_length(max: usize, messages: &ValidationMessages) -> Self {
        let msg = messages.max_length_message(max);
        Self::new(move |value| {
            if value.chars().count() > max {
                Err(ValidationError::new(
                    ValidationErrorKind::MaxLength(max),
                    msg.clone(),
                ))
            } else {
                Ok(())
            }
        })
    }

    /// Fail when the value does not match `pattern`.
    pub fn pattern(pattern: &str, msg: impl Into<String>) -> FormResult<Self> {
        let re = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let msg = msg.into();
        Ok(Self::new(move |value| {
            if re.is_match(value) {
                Ok(())
            } else {
                Err(ValidationError::new(ValidationErrorKind::Pattern, msg.clone()))
            }
        }))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}
