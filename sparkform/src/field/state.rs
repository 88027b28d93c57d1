//! Per-field mutable state.

use crate::animation::{
    AnimationTicket, LabelAnimation, LabelAnimationConfig, LabelEndpoint, LabelPhase,
};
use crate::theme::{DefaultTheme, Theme};
use crate::validation::{ValidationError, Validator};

/// Value, interaction flags, cached validation result and label position of
/// one field.
///
/// Invariants:
/// - a field starts clean whatever its initial value; `dirty` only becomes
///   false again through a reset.
/// - the label targets the stacked position iff the value is non-empty or
///   the field is focused (select fields are always stacked).
/// - the cached error is only *displayed* while unfocused and dirty.
#[derive(Debug)]
pub struct FieldState {
    value: String,
    initial: String,
    dirty: bool,
    focused: bool,
    error: Option<ValidationError>,
    validated: bool,
    label: LabelAnimation,
}

impl FieldState {
    pub(crate) fn new(initial: impl Into<String>, always_stacked: bool) -> Self {
        let initial = initial.into();
        let at = if always_stacked || !initial.is_empty() {
            LabelEndpoint::Stacked
        } else {
            LabelEndpoint::Inline
        };
        Self {
            value: initial.clone(),
            dirty: false,
            initial,
            focused: false,
            error: None,
            validated: false,
            label: LabelAnimation::themed(&DefaultTheme, LabelAnimationConfig::default(), at),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value restored by a reset.
    pub fn initial_value(&self) -> &str {
        &self.initial
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True once the field was focused or held content since the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Result of the last validation run. `None` also when never validated.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether a validation result has been computed yet.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Whether the error should replace the hint right now.
    pub fn is_error_visible(&self) -> bool {
        !self.focused && self.dirty && self.error.is_some()
    }

    pub fn label(&self) -> &LabelAnimation {
        &self.label
    }

    pub fn label_phase(&self) -> LabelPhase {
        self.label.phase()
    }

    fn wants_stacked_label(&self, always_stacked: bool) -> bool {
        always_stacked || self.focused || !self.value.is_empty()
    }

    // -------------------------------------------------------------------------
    // Mutation (driven by the owning field)
    // -------------------------------------------------------------------------

    pub(crate) fn set_value(&mut self, value: String) {
        if !value.is_empty() {
            self.dirty = true;
        }
        self.value = value;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.dirty = true;
        }
    }

    pub(crate) fn restore_initial(&mut self) {
        self.value = self.initial.clone();
        self.dirty = false;
    }

    /// Run `validator` against the current value. Returns true when the
    /// stored result changed (or was computed for the first time).
    pub(crate) fn run_validator(&mut self, validator: Option<&Validator>) -> bool {
        let next = validator.and_then(|v| v.validate(&self.value).err());
        let changed = !self.validated || next != self.error;
        self.error = next;
        self.validated = true;
        changed
    }

    /// Validate only if no result is cached yet.
    pub(crate) fn ensure_validated(
        &mut self,
        validator: Option<&Validator>,
    ) -> Option<&ValidationError> {
        if !self.validated {
            self.run_validator(validator);
        }
        self.error.as_ref()
    }

    pub(crate) fn invalidate(&mut self) {
        self.validated = false;
    }

    /// Start the label transition the current value/focus calls for.
    pub(crate) fn sync_label(&mut self, always_stacked: bool) -> Option<AnimationTicket> {
        let want_stacked = self.wants_stacked_label(always_stacked);
        match (want_stacked, self.label.target()) {
            (true, LabelEndpoint::Inline) => self.label.forward(),
            (false, LabelEndpoint::Stacked) => self.label.reverse(),
            _ => None,
        }
    }

    pub(crate) fn label_mut(&mut self) -> &mut LabelAnimation {
        &mut self.label
    }

    /// Rebuild the label endpoints from `theme`, resting where the state says.
    pub(crate) fn restyle(
        &mut self,
        theme: &dyn Theme,
        config: LabelAnimationConfig,
        always_stacked: bool,
    ) {
        let at = if self.wants_stacked_label(always_stacked) {
            LabelEndpoint::Stacked
        } else {
            LabelEndpoint::Inline
        };
        self.label = LabelAnimation::themed(theme, config, at);
    }
}
