//! Buttons owned by a form.

use std::fmt;

use super::Form;

/// Handle of a button inside its [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(usize);

impl ButtonId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button#{}", self.0)
    }
}

/// What tapping a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Runs its callback; enabled iff the form is valid.
    Submit,
    /// Resets the form; always enabled.
    Reset,
}

pub(crate) type SubmitCallback = Box<dyn FnMut(&mut Form)>;

/// A button observing the form's aggregate validity.
pub struct Button {
    label: String,
    kind: ButtonKind,
    enabled: bool,
    pub(crate) on_tapped: Option<SubmitCallback>,
}

impl Button {
    pub(crate) fn new(
        label: impl Into<String>,
        kind: ButtonKind,
        enabled: bool,
        on_tapped: Option<SubmitCallback>,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            enabled,
            on_tapped,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true when the state changed.
    pub(crate) fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
