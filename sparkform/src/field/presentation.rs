use crate::animation::{LabelMetrics, LabelPhase};
use crate::render::{Size, TextMeasure};
use crate::theme::{ColorRole, Theme};

/// Everything a renderer needs to draw one field.
///
/// Computed from the field state on every call, never cached, so the error
/// text can't disagree with `(focused, dirty, error)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPresentation {
    pub label: String,
    pub label_color: ColorRole,
    pub label_metrics: LabelMetrics,
    pub label_phase: LabelPhase,
    /// Validation message when visible, the configured hint otherwise.
    pub hint: String,
    pub hint_color: ColorRole,
    pub error_visible: bool,
    pub placeholder: Option<String>,
    /// Text to show in the input (obscured for password fields).
    pub value: String,
    pub focused: bool,
    pub disabled: bool,
}

impl FieldPresentation {
    /// Minimum size of the field: input box, stacked label on top, hint
    /// below.
    pub fn min_size(&self, measure: &dyn TextMeasure, theme: &dyn Theme) -> Size {
        let input = measure.input_min_size();
        let label = measure.measure(&self.label, theme.caption_text_size());
        let hint = measure.measure(&self.hint, theme.hint_text_size());
        let side_pad = theme.padding() * 4.0;

        let height = input.height + label.height - theme.input_border_size() * 2.0 + hint.height;
        let width = input
            .width
            .max(side_pad + label.width)
            .max(side_pad + hint.width);
        Size::new(width, height)
    }
}
