//! Select-entry form field: free text with suggested options.

use super::base::FieldCore;
use super::{FieldBehavior, FieldUpdate};

/// A text field that also offers a list of suggestions. Any text is a
/// valid value; the label floats like a plain text field.
#[derive(Debug)]
pub struct SelectEntryFormField {
    core: FieldCore,
    options: Vec<String>,
}

impl SelectEntryFormField {
    pub fn new<I, S>(label: impl Into<String>, initial: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            core: FieldCore::new(label, initial, false),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the suggestion list.
    pub fn set_options<I, S>(&mut self, options: I) -> FieldUpdate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        FieldUpdate {
            repaint: true,
            ..FieldUpdate::default()
        }
    }

    /// Suggestions containing the current text (case-insensitive).
    pub fn matching_options(&self) -> Vec<&str> {
        let needle = self.core.state().value().to_lowercase();
        self.options
            .iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn type_char(&mut self, ch: char) -> FieldUpdate {
        self.core.push_char(ch)
    }

    pub fn type_str(&mut self, text: &str) -> FieldUpdate {
        text.chars()
            .fold(FieldUpdate::default(), |update, ch| update.merge(self.type_char(ch)))
    }

    pub fn backspace(&mut self) -> FieldUpdate {
        self.core.pop_char()
    }
}

impl FieldBehavior for SelectEntryFormField {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }
}
