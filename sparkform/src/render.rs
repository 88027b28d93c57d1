//! Render collaborator contracts.
//!
//! The core never paints. It tells the host what needs repainting and asks
//! it to measure text when computing minimum sizes.

use crate::form::{ButtonId, FieldId};

/// A width/height pair in device-independent units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// What a repaint request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepaintTarget {
    Field(FieldId),
    Button(ButtonId),
}

/// Receives repaint requests whenever display-relevant state changes
/// (error text, label phase or metrics, enabled/disabled).
pub trait Repaint {
    fn repaint(&mut self, target: RepaintTarget);
}

impl<F> Repaint for F
where
    F: FnMut(RepaintTarget),
{
    fn repaint(&mut self, target: RepaintTarget) {
        self(target)
    }
}

/// Text measurement supplied by the host toolkit.
pub trait TextMeasure {
    /// Size of `text` rendered at `text_size`.
    fn measure(&self, text: &str, text_size: f32) -> Size;

    /// Minimum size of the bare input box.
    fn input_min_size(&self) -> Size;
}
