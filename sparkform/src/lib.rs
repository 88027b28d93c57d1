//! Form-field state machine: validation, dirty/focus tracking, floating
//! label animation and form-wide validity aggregation.
//!
//! The crate never paints. Hosts plug in through the [`render::Repaint`],
//! [`render::TextMeasure`], [`theme::Theme`] and
//! [`animation::AnimationScheduler`] traits.

pub mod animation;
pub mod error;
pub mod field;
pub mod form;
pub mod render;
pub mod theme;
pub mod validation;

pub use error::{FormError, FormResult};
pub use form::{Form, FormBuilder};

pub mod prelude {
    pub use crate::animation::{
        AnimationScheduler, AnimationTicket, Easing, LabelAnimation, LabelAnimationConfig,
        LabelEndpoint, LabelMetrics, LabelPhase,
    };
    pub use crate::error::{FormError, FormResult};
    pub use crate::field::{
        FieldBehavior, FieldKind, FieldOptions, FieldPresentation, FieldUpdate, FormField,
        InputMask, InputRestriction, SelectEntryFormField, SelectFormField, TextFormField,
    };
    pub use crate::form::{ButtonId, ButtonKind, FieldId, Form, FormBuilder, FormConfig};
    pub use crate::render::{Repaint, RepaintTarget, Size, TextMeasure};
    pub use crate::theme::{Color, ColorRole, DefaultTheme, Theme};
    pub use crate::validation::{
        ValidationError, ValidationErrorKind, ValidationMessages, Validator,
    };
}
