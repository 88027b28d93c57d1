//! Form fields.
//!
//! Every field kind wraps a [`FieldCore`] (label, hint, validator,
//! callbacks and the [`FieldState`] machine) and implements
//! [`FieldBehavior`]. The closed set of kinds a [`crate::form::Form`] can
//! own is the [`FormField`] enum.
//!
//! Field operations never call up into the form. They return a
//! [`FieldUpdate`] describing what happened and the form dispatches it
//! (repaint, animation scheduling, aggregate validity).

mod any_field;
mod base;
mod presentation;
mod restrict;
mod select;
mod select_entry;
mod state;
mod text;

pub use any_field::{FieldKind, FormField};
pub use base::FieldCore;
pub use presentation::FieldPresentation;
pub use restrict::{InputMask, InputRestriction};
pub use select::SelectFormField;
pub use select_entry::SelectEntryFormField;
pub use state::FieldState;
pub use text::TextFormField;

use crate::animation::AnimationTicket;
use crate::error::FormResult;
use crate::validation::{ValidationError, Validator};

/// Outcome of one field operation.
#[derive(Debug, Default)]
#[must_use]
pub struct FieldUpdate {
    /// The value changed (or was reset) and the form must re-aggregate.
    pub changed: bool,
    /// Display-relevant state changed.
    pub repaint: bool,
    /// A label transition started and needs a scheduler.
    pub animation: Option<AnimationTicket>,
}

impl FieldUpdate {
    /// Combine two consecutive updates. The later ticket wins because
    /// starting it expired the earlier one.
    pub fn merge(self, next: FieldUpdate) -> FieldUpdate {
        FieldUpdate {
            changed: self.changed || next.changed,
            repaint: self.repaint || next.repaint,
            animation: next.animation.or(self.animation),
        }
    }

    /// Nothing happened.
    pub fn is_noop(&self) -> bool {
        !self.changed && !self.repaint && self.animation.is_none()
    }
}

/// Capabilities shared by every field kind.
///
/// Implementors only provide access to their [`FieldCore`]; kinds with
/// special rules override the relevant defaults.
pub trait FieldBehavior {
    fn core(&self) -> &FieldCore;

    fn core_mut(&mut self) -> &mut FieldCore;

    fn label(&self) -> &str {
        self.core().label()
    }

    /// Current value.
    fn text(&self) -> &str {
        self.core().state().value()
    }

    /// Replace the value programmatically.
    ///
    /// Marks the field dirty when the new value is non-empty, revalidates,
    /// moves the label and fires the field's `on_changed` callback.
    fn set_text(&mut self, text: &str) -> FormResult<FieldUpdate> {
        Ok(self.core_mut().replace_text(text.to_string()))
    }

    /// Restore the initial value and clear the dirty flag.
    fn reset(&mut self) -> FieldUpdate {
        self.core_mut().reset()
    }

    /// Hand the current value to the `on_saved` callback, if any.
    fn save(&mut self) {
        self.core_mut().save();
    }

    /// Current validation result, computed on first use.
    fn validate(&mut self) -> Option<ValidationError> {
        self.core_mut().validate()
    }

    /// Run the validator again. Returns true when the result changed.
    fn revalidate(&mut self) -> bool {
        self.core_mut().revalidate()
    }

    /// Cached result of the last validation run, without computing.
    fn validation_error(&self) -> Option<&ValidationError> {
        self.core().state().validation_error()
    }

    fn focus_gained(&mut self) -> FieldUpdate {
        self.core_mut().focus_gained()
    }

    fn focus_lost(&mut self) -> FieldUpdate {
        self.core_mut().focus_lost()
    }

    fn is_disabled(&self) -> bool {
        self.core().is_disabled()
    }

    /// Enable or disable the field. Disabling drops focus.
    fn set_disabled(&mut self, disabled: bool) -> FieldUpdate {
        self.core_mut().set_disabled(disabled)
    }

    fn state(&self) -> &FieldState {
        self.core().state()
    }

    /// Whether the placeholder text replaces the (empty) value right now.
    fn placeholder_visible(&self) -> bool {
        let state = self.core().state();
        state.is_focused() && state.is_empty()
    }

    /// Value as shown to the user.
    fn display_value(&self) -> String {
        self.text().to_string()
    }

    /// Snapshot of everything needed to draw the field.
    fn presentation(&self) -> FieldPresentation {
        self.core()
            .presentation(self.placeholder_visible(), self.display_value())
    }
}

/// Builder-style configuration available on every field kind.
pub trait FieldOptions: FieldBehavior + Sized {
    /// Help text shown below the input while no error is visible.
    fn hint(mut self, hint: impl Into<String>) -> Self {
        self.core_mut().set_hint(hint.into());
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.core_mut().set_placeholder(placeholder.into());
        self
    }

    fn validator(mut self, validator: Validator) -> Self {
        self.core_mut().set_validator(Some(validator));
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.core_mut().set_disabled_flag(disabled);
        self
    }

    /// Called with the new value after every change.
    fn on_changed(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.core_mut().set_on_changed(Box::new(callback));
        self
    }

    /// Called with the current value by [`FieldBehavior::save`].
    fn on_saved(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.core_mut().set_on_saved(Box::new(callback));
        self
    }
}

impl<T: FieldBehavior> FieldOptions for T {}
