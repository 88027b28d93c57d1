//! Text form field with a floating label.

use super::base::FieldCore;
use super::restrict::{InputMask, InputRestriction};
use super::{FieldBehavior, FieldUpdate};

const PASSWORD_BULLET: char = '•';

/// A single-line text field whose label floats above the input once the
/// field is focused or non-empty.
///
/// # Example
///
/// ```
/// use sparkform::prelude::*;
///
/// let messages = ValidationMessages::default();
/// let mut name = TextFormField::new("Name", "")
///     .hint("Your name")
///     .validator(Validator::not_empty(&messages));
///
/// assert!(name.validate().is_some());
/// let _ = name.set_text("Jorge");
/// assert!(name.validate().is_none());
/// ```
#[derive(Debug)]
pub struct TextFormField {
    core: FieldCore,
    max_length: Option<usize>,
    restriction: InputRestriction,
    mask: Option<InputMask>,
    password: bool,
}

impl TextFormField {
    /// Create a text field starting at `initial`.
    pub fn new(label: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(label, initial, false),
            max_length: None,
            restriction: InputRestriction::Text,
            mask: None,
            password: false,
        }
    }

    /// Create a text field that only accepts characters allowed by
    /// `restriction`.
    pub fn restricted(
        label: impl Into<String>,
        initial: impl Into<String>,
        restriction: InputRestriction,
    ) -> Self {
        Self::new(label, initial).restrict(restriction)
    }

    /// Create an empty field driven by an [`InputMask`].
    pub fn masked(label: impl Into<String>, mask: &str, placeholder: impl Into<String>) -> Self {
        let mut field = Self::new(label, "");
        field.mask = Some(InputMask::new(mask));
        field.core.set_placeholder(placeholder.into());
        field
    }

    /// Create a field whose value is shown obscured.
    pub fn password(label: impl Into<String>, initial: impl Into<String>) -> Self {
        Self::new(label, initial).obscured(true)
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Limit typed input to `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn restrict(mut self, restriction: InputRestriction) -> Self {
        self.restriction = restriction;
        self
    }

    pub fn obscured(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn length_limit(&self) -> Option<usize> {
        self.max_length
    }

    pub fn input_restriction(&self) -> InputRestriction {
        self.restriction
    }

    pub fn input_mask(&self) -> Option<&InputMask> {
        self.mask.as_ref()
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    // -------------------------------------------------------------------------
    // Keyboard input
    // -------------------------------------------------------------------------

    /// Type one character at the end of the value.
    ///
    /// Ignored when disabled, when the length limit is reached, or when the
    /// mask/restriction rejects the character.
    pub fn type_char(&mut self, ch: char) -> FieldUpdate {
        if !self.core.accepts_typing() {
            return FieldUpdate::default();
        }
        let current = self.core.state().value();

        let next = if let Some(mask) = &self.mask {
            match mask.apply(current, ch) {
                Some(next) => next,
                None => return FieldUpdate::default(),
            }
        } else {
            if let Some(max) = self.max_length
                && current.chars().count() >= max
            {
                return FieldUpdate::default();
            }
            if !self.restriction.accepts(current, ch) {
                return FieldUpdate::default();
            }
            let mut next = current.to_string();
            next.push(ch);
            next
        };

        self.core.replace_text(next)
    }

    /// Type every character of `text` in order.
    pub fn type_str(&mut self, text: &str) -> FieldUpdate {
        text.chars()
            .fold(FieldUpdate::default(), |update, ch| update.merge(self.type_char(ch)))
    }

    /// Delete the last character.
    pub fn backspace(&mut self) -> FieldUpdate {
        self.core.pop_char()
    }
}

impl FieldBehavior for TextFormField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn display_value(&self) -> String {
        let value = self.core.state().value();
        if self.password {
            std::iter::repeat_n(PASSWORD_BULLET, value.chars().count()).collect()
        } else {
            value.to_string()
        }
    }
}
