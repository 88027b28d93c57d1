//! Character filters for typed input.

use serde::{Deserialize, Serialize};

/// Which characters a text field accepts from the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputRestriction {
    /// Anything.
    #[default]
    Text,
    /// Digits with an optional leading minus.
    Integer,
    /// Like `Integer`, plus a single decimal point.
    Float,
    /// ASCII letters, digits and `-_.@`.
    Email,
}

impl InputRestriction {
    /// Whether `ch` may be appended to `text`.
    pub fn accepts(self, text: &str, ch: char) -> bool {
        match self {
            InputRestriction::Text => true,
            InputRestriction::Email => {
                ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '@')
            }
            InputRestriction::Integer | InputRestriction::Float => {
                if ch == '-' {
                    return text.is_empty();
                }
                if self == InputRestriction::Float && ch == '.' {
                    return !text.contains('.');
                }
                ch.is_ascii_digit()
            }
        }
    }
}

/// A fixed-shape input mask.
///
/// `9` takes a digit, `a` a letter, `*` a letter or digit. Any other
/// character is a literal, inserted automatically as the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMask {
    slots: Vec<char>,
}

impl InputMask {
    pub fn new(mask: &str) -> Self {
        Self {
            slots: mask.chars().collect(),
        }
    }

    /// Number of characters a complete value has.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Text after typing `ch` at the end of `text`, or `None` when nothing
    /// changes.
    ///
    /// Pending literals are inserted first; typing a literal itself just
    /// advances past it. Literals already inserted stay even when `ch` is
    /// then rejected by its slot.
    pub fn apply(&self, text: &str, ch: char) -> Option<String> {
        let mut len = text.chars().count();
        if len >= self.slots.len() {
            return None;
        }

        let mut out = text.to_string();
        while let Some(&literal) = self.slots.get(len).filter(|c| !is_slot(**c)) {
            out.push(literal);
            len += 1;
            if literal == ch || len >= self.slots.len() {
                return Some(out);
            }
        }

        if slot_accepts(self.slots[len], ch) {
            out.push(ch);
        }
        (out != text).then_some(out)
    }
}

fn is_slot(c: char) -> bool {
    matches!(c, '9' | 'a' | '*')
}

fn slot_accepts(slot: char, ch: char) -> bool {
    match slot {
        '9' => ch.is_ascii_digit(),
        'a' => ch.is_alphabetic(),
        '*' => ch.is_alphanumeric(),
        _ => false,
    }
}
