//! The form aggregate.
//!
//! A [`Form`] owns its fields in insertion order and is the only path by
//! which they are mutated once built. Every field operation returns a
//! [`FieldUpdate`]; the form turns it into repaint requests, scheduled
//! label animations and, for value changes, a re-aggregation of validity
//! that drives the submit buttons and the validity-changed callback.
//!
//! # Example
//!
//! ```
//! use sparkform::prelude::*;
//!
//! let messages = ValidationMessages::default();
//! let mut form = Form::builder()
//!     .field(TextFormField::new("Name", "").validator(Validator::not_empty(&messages)))
//!     .build();
//! let submit = form.create_submit_button("Send", |_form| {});
//!
//! assert!(!form.is_valid());
//! let name = form.find("Name").unwrap();
//! form.set_text(name, "Jorge").unwrap();
//! assert!(form.button(submit).unwrap().is_enabled());
//! ```

mod button;
mod focus;

pub use button::{Button, ButtonId, ButtonKind};
pub use focus::FocusState;

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationScheduler, AnimationTicket, LabelAnimationConfig};
use crate::error::{FormError, FormResult};
use crate::field::{FieldBehavior, FieldKind, FieldPresentation, FieldUpdate, FormField};
use crate::render::{Repaint, RepaintTarget, Size, TextMeasure};
use crate::theme::{DefaultTheme, Theme};
use crate::validation::{ValidationError, ValidationMessages};

/// Handle of a field inside its [`Form`] (its insertion index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl FieldId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Form-wide settings, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Grid columns used to lay out the fields (layout hint only).
    pub columns: usize,
    pub messages: ValidationMessages,
    pub animation: LabelAnimationConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            messages: ValidationMessages::default(),
            animation: LabelAnimationConfig::default(),
        }
    }
}

type ChangedCallback = Box<dyn FnMut()>;
type ValidityCallback = Box<dyn FnMut(bool)>;

/// Builder for [`Form`].
pub struct FormBuilder {
    columns: usize,
    fields: Vec<FormField>,
    theme: Box<dyn Theme>,
    animation: LabelAnimationConfig,
    on_changed: Option<ChangedCallback>,
    on_validation_changed: Option<ValidityCallback>,
    repaint: Option<Box<dyn Repaint>>,
    scheduler: Option<Box<dyn AnimationScheduler>>,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self {
            columns: 1,
            fields: Vec::new(),
            theme: Box::new(DefaultTheme),
            animation: LabelAnimationConfig::default(),
            on_changed: None,
            on_validation_changed: None,
            repaint: None,
            scheduler: None,
        }
    }
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Take columns and label animation timing from `config`.
    pub fn config(mut self, config: &FormConfig) -> Self {
        self.columns = config.columns;
        self.animation = config.animation;
        self
    }

    pub fn theme(mut self, theme: impl Theme + 'static) -> Self {
        self.theme = Box::new(theme);
        self
    }

    /// Append a field.
    pub fn field(mut self, field: impl Into<FormField>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append a field and return the id it will have in the built form.
    pub fn push_field(&mut self, field: impl Into<FormField>) -> FieldId {
        self.fields.push(field.into());
        FieldId(self.fields.len() - 1)
    }

    pub fn fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FormField>,
    {
        for field in fields {
            self.fields.push(field.into());
        }
        self
    }

    /// Called after any field change, before validity is re-aggregated.
    pub fn on_changed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_changed = Some(Box::new(callback));
        self
    }

    /// Called with the new aggregate whenever it flips, and once on build.
    pub fn on_validation_changed(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_validation_changed = Some(Box::new(callback));
        self
    }

    pub fn repaint(mut self, repaint: impl Repaint + 'static) -> Self {
        self.repaint = Some(Box::new(repaint));
        self
    }

    pub fn scheduler(mut self, scheduler: impl AnimationScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Attach and validate every field, then report the initial aggregate.
    pub fn build(self) -> Form {
        let mut form = Form {
            columns: self.columns.max(1),
            fields: self.fields,
            buttons: Vec::new(),
            is_valid: true,
            focus: FocusState::new(),
            theme: self.theme,
            on_changed: self.on_changed,
            on_validation_changed: self.on_validation_changed,
            repaint: self.repaint,
            scheduler: self.scheduler,
        };

        for (index, field) in form.fields.iter_mut().enumerate() {
            field
                .core_mut()
                .attach(FieldId(index), form.theme.as_ref(), self.animation);
            field.validate();
        }
        form.is_valid = form.cached_validity();
        log::debug!(
            "form built with {} fields, valid: {}",
            form.fields.len(),
            form.is_valid
        );
        if let Some(on_validation_changed) = form.on_validation_changed.as_mut() {
            on_validation_changed(form.is_valid);
        }
        form
    }
}

/// An ordered set of fields with aggregate validity.
pub struct Form {
    columns: usize,
    fields: Vec<FormField>,
    buttons: Vec<Button>,
    is_valid: bool,
    focus: FocusState,
    theme: Box<dyn Theme>,
    on_changed: Option<ChangedCallback>,
    on_validation_changed: Option<ValidityCallback>,
    repaint: Option<Box<dyn Repaint>>,
    scheduler: Option<Box<dyn AnimationScheduler>>,
}

impl Form {
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Build a form with default theme and no collaborators.
    pub fn new<I, F>(columns: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FormField>,
    {
        FormBuilder::new().columns(columns).fields(fields).build()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn field(&self, id: FieldId) -> FormResult<&FormField> {
        self.fields.get(id.0).ok_or(FormError::UnknownField(id))
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Ids of every field, in insertion order.
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + use<> {
        (0..self.fields.len()).map(FieldId)
    }

    /// First field carrying `label`.
    pub fn find(&self, label: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|field| field.label() == label)
            .map(FieldId)
    }

    pub fn button(&self, id: ButtonId) -> FormResult<&Button> {
        self.buttons
            .get(id.index())
            .ok_or(FormError::UnknownButton(id))
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Last aggregate computed, without revalidating.
    pub fn validity(&self) -> bool {
        self.is_valid
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focus.current()
    }

    pub fn presentation(&self, id: FieldId) -> FormResult<FieldPresentation> {
        Ok(self.field(id)?.presentation())
    }

    /// (row, column) of the field at `index` in the grid.
    pub fn grid_cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Minimum size of the whole grid: every cell is as large as the
    /// largest field, cells are separated by the theme padding.
    pub fn min_size(&self, measure: &dyn TextMeasure) -> Size {
        if self.fields.is_empty() {
            return Size::default();
        }
        let cell = self
            .fields
            .iter()
            .map(|field| field.presentation().min_size(measure, self.theme.as_ref()))
            .fold(Size::default(), Size::max);

        let columns = self.columns.min(self.fields.len());
        let rows = self.fields.len().div_ceil(self.columns);
        let pad = self.theme.padding();
        Size::new(
            cell.width * columns as f32 + pad * (columns - 1) as f32,
            cell.height * rows as f32 + pad * (rows - 1) as f32,
        )
    }

    // -------------------------------------------------------------------------
    // Field mutation
    // -------------------------------------------------------------------------

    /// Replace the value of a field.
    pub fn set_text(&mut self, id: FieldId, text: &str) -> FormResult<()> {
        let update = self.field_mut(id)?.set_text(text)?;
        self.after_field_update(id, update);
        Ok(())
    }

    /// Pick an option of a select field.
    pub fn set_selected(&mut self, id: FieldId, option: &str) -> FormResult<()> {
        let update = match self.field_mut(id)? {
            FormField::Select(select) => select.set_selected(option)?,
            _ => {
                return Err(FormError::KindMismatch {
                    field: id,
                    expected: "select",
                });
            }
        };
        self.after_field_update(id, update);
        Ok(())
    }

    /// Type one character into a text-like field.
    pub fn type_char(&mut self, id: FieldId, ch: char) -> FormResult<()> {
        let update = self
            .field_mut(id)?
            .type_char(ch)
            .ok_or_else(|| text_like_mismatch(id))?;
        self.after_field_update(id, update);
        Ok(())
    }

    /// Type every character of `text` into a text-like field, dispatching
    /// after each one as if typed separately.
    pub fn type_text(&mut self, id: FieldId, text: &str) -> FormResult<()> {
        if self.field(id)?.kind() == FieldKind::Select {
            return Err(text_like_mismatch(id));
        }
        for ch in text.chars() {
            self.type_char(id, ch)?;
        }
        Ok(())
    }

    pub fn backspace(&mut self, id: FieldId) -> FormResult<()> {
        let update = self
            .field_mut(id)?
            .backspace()
            .ok_or_else(|| text_like_mismatch(id))?;
        self.after_field_update(id, update);
        Ok(())
    }

    /// Replace the option list of a select or select-entry field.
    pub fn set_options(&mut self, id: FieldId, options: Vec<String>) -> FormResult<()> {
        let update = self
            .field_mut(id)?
            .set_options(options)
            .ok_or(FormError::KindMismatch {
                field: id,
                expected: "option list",
            })?;
        self.after_field_update(id, update);
        Ok(())
    }

    /// Enable or disable a field. A disabled field loses focus.
    pub fn set_disabled(&mut self, id: FieldId, disabled: bool) -> FormResult<()> {
        let update = self.field_mut(id)?.set_disabled(disabled);
        if disabled && self.focus.is_focused(id) {
            self.focus.clear_focus();
        }
        self.after_field_update(id, update);
        Ok(())
    }

    pub fn reset_field(&mut self, id: FieldId) -> FormResult<()> {
        let update = self.field_mut(id)?.reset();
        self.after_field_update(id, update);
        Ok(())
    }

    /// Reset every field in insertion order.
    pub fn reset(&mut self) {
        log::debug!("resetting form");
        for index in 0..self.fields.len() {
            let update = self.fields[index].reset();
            self.after_field_update(FieldId(index), update);
        }
    }

    /// Hand every field's value to its `on_saved` callback, in insertion
    /// order. Not gated on validity.
    pub fn save(&mut self) {
        for field in &mut self.fields {
            field.save();
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    pub fn validate_field(&mut self, id: FieldId) -> FormResult<Option<ValidationError>> {
        Ok(self.field_mut(id)?.validate())
    }

    /// Revalidate every field and return the aggregate.
    ///
    /// Fields whose result changed are repainted; observers are notified if
    /// the aggregate flips. Dirty and focus flags are left alone.
    pub fn is_valid(&mut self) -> bool {
        for (index, field) in self.fields.iter_mut().enumerate() {
            if field.revalidate()
                && let Some(repaint) = self.repaint.as_mut()
            {
                repaint.repaint(RepaintTarget::Field(FieldId(index)));
            }
        }
        let valid = self.cached_validity();
        self.apply_validity(valid);
        valid
    }

    /// AND of every field's cached result. Visits all fields.
    fn cached_validity(&self) -> bool {
        self.fields
            .iter()
            .fold(true, |valid, field| field.validation_error().is_none() && valid)
    }

    fn apply_validity(&mut self, valid: bool) {
        if self.is_valid == valid {
            return;
        }
        self.is_valid = valid;
        log::debug!("form validity changed to {}", valid);

        for (index, button) in self.buttons.iter_mut().enumerate() {
            if button.kind() == ButtonKind::Submit
                && button.set_enabled(valid)
                && let Some(repaint) = self.repaint.as_mut()
            {
                repaint.repaint(RepaintTarget::Button(ButtonId::new(index)));
            }
        }
        if let Some(on_validation_changed) = self.on_validation_changed.as_mut() {
            on_validation_changed(valid);
        }
    }

    fn field_did_change(&mut self) {
        if let Some(on_changed) = self.on_changed.as_mut() {
            on_changed();
        }
        let valid = self.cached_validity();
        self.apply_validity(valid);
    }

    fn after_field_update(&mut self, id: FieldId, update: FieldUpdate) {
        if update.repaint
            && let Some(repaint) = self.repaint.as_mut()
        {
            repaint.repaint(RepaintTarget::Field(id));
        }
        if let Some(ticket) = update.animation
            && let Some(scheduler) = self.scheduler.as_mut()
        {
            scheduler.schedule(id, ticket);
        }
        if update.changed {
            self.field_did_change();
        }
    }

    fn field_mut(&mut self, id: FieldId) -> FormResult<&mut FormField> {
        self.fields.get_mut(id.0).ok_or(FormError::UnknownField(id))
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Give focus to a field. Returns false when the field is disabled.
    pub fn focus(&mut self, id: FieldId) -> FormResult<bool> {
        if self.field(id)?.is_disabled() {
            log::warn!("field {} is disabled; focus refused", id);
            return Ok(false);
        }
        self.move_focus(id);
        Ok(true)
    }

    /// A tap on the field's label focuses the field.
    pub fn tap_label(&mut self, id: FieldId) -> FormResult<bool> {
        self.focus(id)
    }

    /// Drop focus from whichever field holds it.
    pub fn blur(&mut self) {
        if let Some(previous) = self.focus.clear_focus() {
            self.deliver_focus_lost(previous);
        }
    }

    /// Move focus to the next enabled field in insertion order.
    pub fn focus_next(&mut self) -> Option<FieldId> {
        let next = self.focus.next_in(&self.tab_order())?;
        self.move_focus(next);
        Some(next)
    }

    /// Move focus to the previous enabled field in insertion order.
    pub fn focus_prev(&mut self) -> Option<FieldId> {
        let prev = self.focus.prev_in(&self.tab_order())?;
        self.move_focus(prev);
        Some(prev)
    }

    fn tab_order(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.is_disabled())
            .map(|(index, _)| FieldId(index))
            .collect()
    }

    fn move_focus(&mut self, id: FieldId) {
        if self.focus.is_focused(id) {
            return;
        }
        if let Some(previous) = self.focus.set_focus(id) {
            self.deliver_focus_lost(previous);
        }
        if let Some(field) = self.fields.get_mut(id.0) {
            let update = field.focus_gained();
            self.after_field_update(id, update);
        }
    }

    fn deliver_focus_lost(&mut self, id: FieldId) {
        if let Some(field) = self.fields.get_mut(id.0) {
            let update = field.focus_lost();
            self.after_field_update(id, update);
        }
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Add a submit button. It starts enabled iff the form is valid.
    pub fn create_submit_button(
        &mut self,
        label: impl Into<String>,
        on_tapped: impl FnMut(&mut Form) + 'static,
    ) -> ButtonId {
        let id = ButtonId::new(self.buttons.len());
        self.buttons.push(Button::new(
            label,
            ButtonKind::Submit,
            self.is_valid,
            Some(Box::new(on_tapped)),
        ));
        id
    }

    /// Add a button that resets the form.
    pub fn create_reset_button(&mut self, label: impl Into<String>) -> ButtonId {
        let id = ButtonId::new(self.buttons.len());
        self.buttons
            .push(Button::new(label, ButtonKind::Reset, true, None));
        id
    }

    /// Tap a button. Returns false when a disabled submit button ignored
    /// the tap.
    pub fn tap_button(&mut self, id: ButtonId) -> FormResult<bool> {
        let button = self
            .buttons
            .get_mut(id.index())
            .ok_or(FormError::UnknownButton(id))?;

        match button.kind() {
            ButtonKind::Reset => {
                self.reset();
                Ok(true)
            }
            ButtonKind::Submit => {
                if !button.is_enabled() {
                    log::debug!("{} is disabled; tap ignored", id);
                    return Ok(false);
                }
                // Taken out while running so the callback can borrow the form.
                let Some(mut on_tapped) = button.on_tapped.take() else {
                    return Ok(false);
                };
                on_tapped(self);
                if let Some(button) = self.buttons.get_mut(id.index()) {
                    button.on_tapped = Some(on_tapped);
                }
                Ok(true)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    /// Deliver a scheduler tick. Returns false for stale tickets.
    pub fn tick_label(
        &mut self,
        id: FieldId,
        ticket: &AnimationTicket,
        progress: f32,
    ) -> FormResult<bool> {
        let applied = self.field_mut(id)?.core_mut().tick_label(ticket, progress);
        if applied && let Some(repaint) = self.repaint.as_mut() {
            repaint.repaint(RepaintTarget::Field(id));
        }
        Ok(applied)
    }

    /// Advance every running label animation to `now`. Returns true while
    /// any of them is still running.
    pub fn sample_animations(&mut self, now: Instant) -> bool {
        let mut running = false;
        for (index, field) in self.fields.iter_mut().enumerate() {
            if !field.core_mut().sample_label(now) {
                continue;
            }
            if let Some(repaint) = self.repaint.as_mut() {
                repaint.repaint(RepaintTarget::Field(FieldId(index)));
            }
            running |= field.state().label().is_animating();
        }
        running
    }
}

fn text_like_mismatch(id: FieldId) -> FormError {
    FormError::KindMismatch {
        field: id,
        expected: "text-like",
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("columns", &self.columns)
            .field("fields", &self.fields)
            .field("buttons", &self.buttons)
            .field("is_valid", &self.is_valid)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}
