//! Configuration and behaviour shared by every field kind.

use std::fmt;
use std::time::Instant;

use super::FieldUpdate;
use super::presentation::FieldPresentation;
use super::state::FieldState;
use crate::animation::{AnimationTicket, LabelAnimationConfig};
use crate::form::FieldId;
use crate::theme::{ColorRole, Theme};
use crate::validation::{ValidationError, Validator};

type TextCallback = Box<dyn FnMut(&str)>;

/// Label, hint, validator and callbacks of a field, plus its [`FieldState`].
///
/// Only constructed by the field kinds in this crate.
pub struct FieldCore {
    label: String,
    hint: String,
    placeholder: String,
    validator: Option<Validator>,
    disabled: bool,
    state: FieldState,
    on_changed: Option<TextCallback>,
    on_saved: Option<TextCallback>,
    id: Option<FieldId>,
    always_stacked: bool,
}

impl FieldCore {
    pub(crate) fn new(
        label: impl Into<String>,
        initial: impl Into<String>,
        always_stacked: bool,
    ) -> Self {
        Self {
            label: label.into(),
            hint: String::new(),
            placeholder: String::new(),
            validator: None,
            disabled: false,
            state: FieldState::new(initial, always_stacked),
            on_changed: None,
            on_saved: None,
            id: None,
            always_stacked,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Handle of this field inside its form, once attached.
    pub fn id(&self) -> Option<FieldId> {
        self.id
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub(crate) fn set_hint(&mut self, hint: String) {
        self.hint = hint;
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = placeholder;
    }

    pub(crate) fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
        self.state.invalidate();
    }

    pub(crate) fn set_disabled_flag(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn set_on_changed(&mut self, callback: TextCallback) {
        self.on_changed = Some(callback);
    }

    pub(crate) fn set_on_saved(&mut self, callback: TextCallback) {
        self.on_saved = Some(callback);
    }

    pub(crate) fn attach(&mut self, id: FieldId, theme: &dyn Theme, config: LabelAnimationConfig) {
        self.id = Some(id);
        self.state.restyle(theme, config, self.always_stacked);
    }

    // -------------------------------------------------------------------------
    // Behaviour
    // -------------------------------------------------------------------------

    /// Replace the value: mark dirty, revalidate, move the label, then fire
    /// `on_changed`. Setting the same value is a no-op.
    pub(crate) fn replace_text(&mut self, text: String) -> FieldUpdate {
        if text == self.state.value() {
            return FieldUpdate::default();
        }
        self.state.set_value(text);
        self.state.run_validator(self.validator.as_ref());
        let animation = self.state.sync_label(self.always_stacked);
        log::trace!("field '{}' changed to {:?}", self.label, self.state.value());

        if let Some(on_changed) = self.on_changed.as_mut() {
            on_changed(self.state.value());
        }

        FieldUpdate {
            changed: true,
            repaint: true,
            animation,
        }
    }

    /// Append one character typed by the user.
    pub(crate) fn push_char(&mut self, ch: char) -> FieldUpdate {
        if !self.accepts_typing() {
            return FieldUpdate::default();
        }
        let mut text = self.state.value().to_string();
        text.push(ch);
        self.replace_text(text)
    }

    /// Remove the last character (backspace with the cursor at the end).
    pub(crate) fn pop_char(&mut self) -> FieldUpdate {
        if !self.accepts_typing() {
            return FieldUpdate::default();
        }
        let mut text = self.state.value().to_string();
        if text.pop().is_none() {
            return FieldUpdate::default();
        }
        self.replace_text(text)
    }

    pub(crate) fn accepts_typing(&self) -> bool {
        if self.disabled {
            log::warn!("field '{}' is disabled; input ignored", self.label);
            return false;
        }
        true
    }

    pub(crate) fn reset(&mut self) -> FieldUpdate {
        self.state.restore_initial();
        self.state.run_validator(self.validator.as_ref());
        let animation = self.state.sync_label(self.always_stacked);
        log::trace!("field '{}' reset", self.label);
        FieldUpdate {
            changed: true,
            repaint: true,
            animation,
        }
    }

    pub(crate) fn save(&mut self) {
        if let Some(on_saved) = self.on_saved.as_mut() {
            on_saved(self.state.value());
        }
    }

    pub(crate) fn validate(&mut self) -> Option<ValidationError> {
        self.state.ensure_validated(self.validator.as_ref()).cloned()
    }

    pub(crate) fn revalidate(&mut self) -> bool {
        self.state.run_validator(self.validator.as_ref())
    }

    pub(crate) fn focus_gained(&mut self) -> FieldUpdate {
        if self.disabled {
            log::warn!("field '{}' is disabled; focus ignored", self.label);
            return FieldUpdate::default();
        }
        if self.state.is_focused() {
            return FieldUpdate::default();
        }
        self.state.set_focused(true);
        FieldUpdate {
            changed: false,
            repaint: true,
            animation: self.state.sync_label(self.always_stacked),
        }
    }

    pub(crate) fn focus_lost(&mut self) -> FieldUpdate {
        if !self.state.is_focused() {
            return FieldUpdate::default();
        }
        self.state.set_focused(false);
        FieldUpdate {
            changed: false,
            repaint: true,
            animation: self.state.sync_label(self.always_stacked),
        }
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) -> FieldUpdate {
        if self.disabled == disabled {
            return FieldUpdate::default();
        }
        let update = if disabled {
            self.focus_lost()
        } else {
            FieldUpdate::default()
        };
        self.disabled = disabled;
        FieldUpdate {
            repaint: true,
            ..update
        }
    }

    pub(crate) fn tick_label(&mut self, ticket: &AnimationTicket, progress: f32) -> bool {
        self.state.label_mut().tick(ticket, progress)
    }

    pub(crate) fn sample_label(&mut self, now: Instant) -> bool {
        self.state.label_mut().sample(now)
    }

    pub(crate) fn presentation(
        &self,
        placeholder_visible: bool,
        value: String,
    ) -> FieldPresentation {
        let state = &self.state;
        let error_visible = state.is_error_visible();

        let (hint, hint_color) = match state.validation_error() {
            Some(error) if error_visible => (error.message().to_string(), ColorRole::Error),
            _ => (self.hint.clone(), ColorRole::Placeholder),
        };

        let label_color = if error_visible {
            ColorRole::Error
        } else if self.disabled {
            ColorRole::Disabled
        } else if state.is_focused() {
            ColorRole::Primary
        } else {
            ColorRole::Placeholder
        };

        let placeholder = (placeholder_visible && !self.placeholder.is_empty())
            .then(|| self.placeholder.clone());

        FieldPresentation {
            label: self.label.clone(),
            label_color,
            label_metrics: state.label().metrics(),
            label_phase: state.label_phase(),
            hint,
            hint_color,
            error_visible,
            placeholder,
            value,
            focused: state.is_focused(),
            disabled: self.disabled,
        }
    }
}

impl fmt::Debug for FieldCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCore")
            .field("label", &self.label)
            .field("hint", &self.hint)
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .field("state", &self.state)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
