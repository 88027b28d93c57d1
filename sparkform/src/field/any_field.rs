use std::fmt;

use super::base::FieldCore;
use super::{FieldBehavior, FieldUpdate, SelectEntryFormField, SelectFormField, TextFormField};
use crate::error::FormResult;

/// Discriminant of a [`FormField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Select,
    SelectEntry,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Text => "text",
            FieldKind::Select => "select",
            FieldKind::SelectEntry => "select-entry",
        })
    }
}

/// Any field a form can own.
#[derive(Debug)]
pub enum FormField {
    Text(TextFormField),
    Select(SelectFormField),
    SelectEntry(SelectEntryFormField),
}

impl FormField {
    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Text(_) => FieldKind::Text,
            FormField::Select(_) => FieldKind::Select,
            FormField::SelectEntry(_) => FieldKind::SelectEntry,
        }
    }

    fn as_behavior(&self) -> &dyn FieldBehavior {
        match self {
            FormField::Text(field) => field,
            FormField::Select(field) => field,
            FormField::SelectEntry(field) => field,
        }
    }

    fn as_behavior_mut(&mut self) -> &mut dyn FieldBehavior {
        match self {
            FormField::Text(field) => field,
            FormField::Select(field) => field,
            FormField::SelectEntry(field) => field,
        }
    }

    // -------------------------------------------------------------------------
    // Kind-specific operations (None when the kind doesn't support them)
    // -------------------------------------------------------------------------

    pub fn type_char(&mut self, ch: char) -> Option<FieldUpdate> {
        match self {
            FormField::Text(field) => Some(field.type_char(ch)),
            FormField::SelectEntry(field) => Some(field.type_char(ch)),
            FormField::Select(_) => None,
        }
    }

    pub fn type_str(&mut self, text: &str) -> Option<FieldUpdate> {
        match self {
            FormField::Text(field) => Some(field.type_str(text)),
            FormField::SelectEntry(field) => Some(field.type_str(text)),
            FormField::Select(_) => None,
        }
    }

    pub fn backspace(&mut self) -> Option<FieldUpdate> {
        match self {
            FormField::Text(field) => Some(field.backspace()),
            FormField::SelectEntry(field) => Some(field.backspace()),
            FormField::Select(_) => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FormField::Select(field) => Some(field.options()),
            FormField::SelectEntry(field) => Some(field.options()),
            FormField::Text(_) => None,
        }
    }

    pub fn set_options(&mut self, options: Vec<String>) -> Option<FieldUpdate> {
        match self {
            FormField::Select(field) => Some(field.set_options(options)),
            FormField::SelectEntry(field) => Some(field.set_options(options)),
            FormField::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextFormField> {
        match self {
            FormField::Text(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&SelectFormField> {
        match self {
            FormField::Select(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_select_entry(&self) -> Option<&SelectEntryFormField> {
        match self {
            FormField::SelectEntry(field) => Some(field),
            _ => None,
        }
    }
}

impl FieldBehavior for FormField {
    fn core(&self) -> &FieldCore {
        self.as_behavior().core()
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        self.as_behavior_mut().core_mut()
    }

    fn set_text(&mut self, text: &str) -> FormResult<FieldUpdate> {
        self.as_behavior_mut().set_text(text)
    }

    fn placeholder_visible(&self) -> bool {
        self.as_behavior().placeholder_visible()
    }

    fn display_value(&self) -> String {
        self.as_behavior().display_value()
    }
}

impl From<TextFormField> for FormField {
    fn from(field: TextFormField) -> Self {
        FormField::Text(field)
    }
}

impl From<SelectFormField> for FormField {
    fn from(field: SelectFormField) -> Self {
        FormField::Select(field)
    }
}

impl From<SelectEntryFormField> for FormField {
    fn from(field: SelectEntryFormField) -> Self {
        FormField::SelectEntry(field)
    }
}
