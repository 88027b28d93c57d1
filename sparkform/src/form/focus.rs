//! Focus tracking across the fields of a form.

use super::FieldId;

/// Which field holds input focus.
///
/// The tab order is passed in by the caller on each move, so disabled
/// fields can be left out without the tracker knowing about them.
#[derive(Debug, Default)]
pub struct FocusState {
    /// Currently focused field
    current: Option<FieldId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused field
    pub fn current(&self) -> Option<FieldId> {
        self.current
    }

    pub fn is_focused(&self, id: FieldId) -> bool {
        self.current == Some(id)
    }

    /// Set focus to a field, returning the one that lost it
    pub fn set_focus(&mut self, id: FieldId) -> Option<FieldId> {
        self.current.replace(id).filter(|previous| *previous != id)
    }

    /// Clear focus, returning the field that lost it
    pub fn clear_focus(&mut self) -> Option<FieldId> {
        self.current.take()
    }

    /// Field after the current one in `order`, wrapping around
    pub fn next_in(&self, order: &[FieldId]) -> Option<FieldId> {
        if order.is_empty() {
            return None;
        }

        let next_idx = match self.position_in(order) {
            Some(idx) => (idx + 1) % order.len(),
            None => 0,
        };
        Some(order[next_idx])
    }

    /// Field before the current one in `order`, wrapping around
    pub fn prev_in(&self, order: &[FieldId]) -> Option<FieldId> {
        if order.is_empty() {
            return None;
        }

        let prev_idx = match self.position_in(order) {
            Some(0) => order.len() - 1,
            Some(idx) => idx - 1,
            None => order.len() - 1,
        };
        Some(order[prev_idx])
    }

    fn position_in(&self, order: &[FieldId]) -> Option<usize> {
        self.current
            .and_then(|current| order.iter().position(|id| *id == current))
    }
}
