//! Select form field.

use super::base::FieldCore;
use super::{FieldBehavior, FieldUpdate};
use crate::error::{FormError, FormResult};

/// A field whose value is picked from a fixed option list.
///
/// The select box always shows either the selection or its placeholder, so
/// the label stays stacked regardless of focus or value.
#[derive(Debug)]
pub struct SelectFormField {
    core: FieldCore,
    options: Vec<String>,
}

impl SelectFormField {
    /// Create a select starting at `initial` (empty for no selection).
    ///
    /// An `initial` value missing from `options` is dropped and the field
    /// starts with no selection, matching what `set_selected` accepts.
    pub fn new<I, S>(label: impl Into<String>, initial: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let mut initial = initial.into();
        if !initial.is_empty() && !options.contains(&initial) {
            log::warn!("select '{}': initial value '{}' is not an option", label, initial);
            initial.clear();
        }
        Self {
            core: FieldCore::new(label, initial, true),
            options,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The selected option, empty when nothing is selected.
    pub fn selected(&self) -> &str {
        self.core.state().value()
    }

    /// Select `option`; an empty string clears the selection.
    pub fn set_selected(&mut self, option: &str) -> FormResult<FieldUpdate> {
        self.set_text(option)
    }

    /// Replace the option list. A selection still offered is kept; one that
    /// is gone is cleared and reported as a value change.
    pub fn set_options<I, S>(&mut self, options: I) -> FieldUpdate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        let update = FieldUpdate {
            repaint: true,
            ..FieldUpdate::default()
        };
        let selected = self.core.state().value();
        if selected.is_empty() || self.options.iter().any(|option| option == selected) {
            return update;
        }
        log::debug!("select '{}': clearing stale selection '{}'", self.core.label(), selected);
        update.merge(self.core.replace_text(String::new()))
    }
}

impl FieldBehavior for SelectFormField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn set_text(&mut self, text: &str) -> FormResult<FieldUpdate> {
        if !text.is_empty() && !self.options.iter().any(|option| option == text) {
            return Err(FormError::UnknownOption {
                field: self.core.label().to_string(),
                option: text.to_string(),
            });
        }
        Ok(self.core.replace_text(text.to_string()))
    }

    fn placeholder_visible(&self) -> bool {
        self.core.state().is_empty()
    }
}
