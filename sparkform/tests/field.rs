//! Tests for individual fields, outside of a form.

use std::cell::RefCell;
use std::rc::Rc;

use sparkform::FormError;
use sparkform::prelude::*;

fn name_field() -> TextFormField {
    let messages = ValidationMessages::default();
    TextFormField::new("Name", "")
        .hint("Your full name")
        .validator(Validator::not_empty(&messages))
}

fn set(field: &mut impl FieldBehavior, text: &str) -> FieldUpdate {
    field.set_text(text).unwrap()
}

fn type_in(field: &mut TextFormField, text: &str) {
    let _ = field.type_str(text);
}

struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, text_size: f32) -> Size {
        Size::new(text.chars().count() as f32 * text_size * 0.5, text_size)
    }

    fn input_min_size(&self) -> Size {
        Size::new(100.0, 30.0)
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_empty_field_starts_clean() {
    let field = name_field();
    let state = field.state();
    assert_eq!(state.value(), "");
    assert!(!state.is_dirty());
    assert!(!state.is_focused());
    assert!(!state.is_validated());
    assert_eq!(state.label_phase(), LabelPhase::Inline);
}

#[test]
fn test_prefilled_field_is_clean_and_stacked() {
    let field = TextFormField::new("City", "Lisbon");
    assert!(!field.state().is_dirty());
    assert_eq!(field.state().label_phase(), LabelPhase::Stacked);
    assert_eq!(field.state().initial_value(), "Lisbon");
}

#[test]
fn test_validate_is_lazy() {
    let mut field = name_field();
    assert!(field.validation_error().is_none());
    assert!(!field.state().is_validated());

    let err = field.validate().unwrap();
    assert_eq!(err.kind(), ValidationErrorKind::NotEmpty);
    assert!(field.state().is_validated());
    assert_eq!(field.validation_error(), Some(&err));
}

#[test]
fn test_field_without_validator_is_valid() {
    let mut field = TextFormField::new("Notes", "");
    assert!(field.validate().is_none());
}

// =============================================================================
// Text changes
// =============================================================================

#[test]
fn test_set_text_revalidates() {
    let mut field = name_field();
    let update = set(&mut field, "Jorge");
    assert!(update.changed);
    assert!(update.repaint);
    assert!(field.validation_error().is_none());

    let _ = set(&mut field, "");
    assert_eq!(
        field.validation_error().map(|e| e.kind()),
        Some(ValidationErrorKind::NotEmpty)
    );
}

#[test]
fn test_set_same_text_is_noop() {
    let mut field = name_field();
    let _ = set(&mut field, "Jorge");
    let update = set(&mut field, "Jorge");
    assert!(update.is_noop());
}

#[test]
fn test_dirty_is_sticky() {
    let mut field = name_field();
    let _ = set(&mut field, "a");
    assert!(field.state().is_dirty());
    let _ = set(&mut field, "");
    assert!(field.state().is_dirty());
    let _ = field.focus_gained();
    let _ = field.focus_lost();
    assert!(field.state().is_dirty());
}

#[test]
fn test_setting_empty_text_on_clean_field_keeps_it_clean() {
    let mut field = TextFormField::new("Name", "x");
    let _ = field.reset();
    let _ = set(&mut field, "");
    assert!(!field.state().is_dirty());
}

#[test]
fn test_on_changed_receives_new_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut field = TextFormField::new("Name", "")
        .on_changed(move |value| sink.borrow_mut().push(value.to_string()));

    let _ = set(&mut field, "Jo");
    let _ = set(&mut field, "Jo");
    let _ = set(&mut field, "Jorge");
    assert_eq!(*seen.borrow(), vec!["Jo".to_string(), "Jorge".to_string()]);
}

// =============================================================================
// Reset and save
// =============================================================================

#[test]
fn test_reset_restores_initial_and_clears_dirty() {
    let messages = ValidationMessages::default();
    let validator = Validator::min_length(3, &messages);
    let mut field = TextFormField::new("Code", "ab").validator(validator.clone());

    let _ = set(&mut field, "abcdef");
    let _ = field.focus_gained();
    let _ = field.focus_lost();

    let update = field.reset();
    assert!(update.changed);
    assert_eq!(field.text(), "ab");
    assert!(!field.state().is_dirty());
    assert_eq!(field.validate(), validator.validate("ab").err());
}

#[test]
fn test_reset_does_not_fire_on_changed() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut field = TextFormField::new("Name", "").on_changed(move |_| *counter.borrow_mut() += 1);

    let _ = set(&mut field, "x");
    let _ = field.reset();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_save_passes_current_value() {
    let saved = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&saved);
    let mut field = TextFormField::new("Name", "")
        .on_saved(move |value| *sink.borrow_mut() = Some(value.to_string()));

    let _ = set(&mut field, "Jorge");
    field.save();
    assert_eq!(saved.borrow().as_deref(), Some("Jorge"));
    assert!(field.validation_error().is_none());
}

#[test]
fn test_save_without_callback_is_noop() {
    let mut field = name_field();
    field.save();
    assert_eq!(field.text(), "");
}

// =============================================================================
// Error visibility
// =============================================================================

#[test]
fn test_error_hidden_until_touched() {
    let mut field = name_field();
    let _ = field.validate();
    let presentation = field.presentation();
    assert!(!presentation.error_visible);
    assert_eq!(presentation.hint, "Your full name");
    assert_eq!(presentation.hint_color, ColorRole::Placeholder);
}

#[test]
fn test_prefilled_invalid_field_hides_error_until_touched() {
    let messages = ValidationMessages::default();
    let mut field = TextFormField::new("Code", "ab")
        .hint("Three or more")
        .validator(Validator::min_length(3, &messages));

    assert!(field.validate().is_some());
    let presentation = field.presentation();
    assert!(!presentation.error_visible);
    assert_eq!(presentation.hint, "Three or more");

    let _ = field.focus_gained();
    let _ = field.focus_lost();
    assert!(field.presentation().error_visible);
}

#[test]
fn test_error_replaces_hint_when_dirty_and_unfocused() {
    let mut field = name_field();
    let _ = set(&mut field, "a");
    let _ = set(&mut field, "");

    let presentation = field.presentation();
    assert!(presentation.error_visible);
    assert_eq!(presentation.hint, "This field cannot be empty");
    assert_eq!(presentation.hint_color, ColorRole::Error);
    assert_eq!(presentation.label_color, ColorRole::Error);
}

#[test]
fn test_error_suppressed_while_focused() {
    let mut field = name_field();
    let _ = set(&mut field, "a");
    let _ = set(&mut field, "");
    let _ = field.focus_gained();

    let presentation = field.presentation();
    assert!(!presentation.error_visible);
    assert_eq!(presentation.hint, "Your full name");
    assert_eq!(presentation.label_color, ColorRole::Primary);

    let _ = field.focus_lost();
    assert!(field.presentation().error_visible);
}

// =============================================================================
// Focus and disabled
// =============================================================================

#[test]
fn test_focus_marks_dirty() {
    let mut field = name_field();
    let update = field.focus_gained();
    assert!(update.repaint);
    assert!(!update.changed);
    assert!(field.state().is_focused());
    assert!(field.state().is_dirty());
}

#[test]
fn test_disabled_field_refuses_focus_and_typing() {
    let mut field = TextFormField::new("Name", "").disabled(true);

    assert!(field.focus_gained().is_noop());
    assert!(!field.state().is_focused());
    assert!(field.type_char('a').is_noop());
    assert_eq!(field.text(), "");
    assert_eq!(field.presentation().label_color, ColorRole::Disabled);
}

#[test]
fn test_disabling_drops_focus() {
    let mut field = TextFormField::new("Name", "");
    let _ = field.focus_gained();
    let _ = field.set_disabled(true);
    assert!(field.is_disabled());
    assert!(!field.state().is_focused());
}

#[test]
fn test_disabled_field_still_accepts_programmatic_text() {
    let mut field = TextFormField::new("Name", "").disabled(true);
    let _ = set(&mut field, "set by code");
    assert_eq!(field.text(), "set by code");
}

// =============================================================================
// Keyboard input
// =============================================================================

#[test]
fn test_type_and_backspace() {
    let mut field = TextFormField::new("Name", "");
    type_in(&mut field, "Jorge");
    assert_eq!(field.text(), "Jorge");

    let _ = field.backspace();
    assert_eq!(field.text(), "Jorg");
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut field = TextFormField::new("Name", "");
    assert!(field.backspace().is_noop());
}

#[test]
fn test_max_length_stops_typing() {
    let mut field = TextFormField::new("Code", "").max_length(3);
    type_in(&mut field, "abcdef");
    assert_eq!(field.text(), "abc");
    assert_eq!(field.length_limit(), Some(3));
}

#[test]
fn test_integer_restriction() {
    let mut field = TextFormField::restricted("Age", "", InputRestriction::Integer);
    type_in(&mut field, "-4x2.5");
    assert_eq!(field.text(), "-425");
}

#[test]
fn test_float_restriction() {
    let mut field = TextFormField::restricted("Price", "", InputRestriction::Float);
    type_in(&mut field, "3.1.4");
    assert_eq!(field.text(), "3.14");
}

#[test]
fn test_mask_formats_input() {
    let mut field = TextFormField::masked("Phone", "(999) 999-9999", "(555) 555-5555");
    type_in(&mut field, "5551234567");
    assert_eq!(field.text(), "(555) 123-4567");

    type_in(&mut field, "8");
    assert_eq!(field.text(), "(555) 123-4567");
}

#[test]
fn test_password_is_obscured() {
    let field = TextFormField::password("Password", "secret");
    assert!(field.is_password());
    assert_eq!(field.text(), "secret");
    assert_eq!(field.presentation().value, "••••••");
}

#[test]
fn test_placeholder_only_while_focused_and_empty() {
    let mut field = TextFormField::new("Email", "").placeholder("you@example.com");
    assert_eq!(field.presentation().placeholder, None);

    let _ = field.focus_gained();
    assert_eq!(
        field.presentation().placeholder.as_deref(),
        Some("you@example.com")
    );

    type_in(&mut field, "a");
    assert_eq!(field.presentation().placeholder, None);
}

// =============================================================================
// Select fields
// =============================================================================

#[test]
fn test_select_label_always_stacked() {
    let mut field = SelectFormField::new("Country", "", ["Portugal", "Spain"]);
    assert_eq!(field.state().label_phase(), LabelPhase::Stacked);

    let _ = field.set_selected("Spain").unwrap();
    let _ = field.set_selected("").unwrap();
    assert_eq!(field.state().label_phase(), LabelPhase::Stacked);
}

#[test]
fn test_select_rejects_unknown_option() {
    let mut field = SelectFormField::new("Country", "", ["Portugal", "Spain"]);
    let result = field.set_selected("Atlantis");
    assert!(matches!(
        result,
        Err(FormError::UnknownOption { ref field, ref option })
            if field == "Country" && option == "Atlantis"
    ));
    assert_eq!(field.selected(), "");
}

#[test]
fn test_select_drops_initial_value_not_in_options() {
    let field = SelectFormField::new("Country", "Atlantis", ["Portugal", "Spain"]);
    assert_eq!(field.selected(), "");
    assert_eq!(field.state().initial_value(), "");

    let field = SelectFormField::new("Country", "Spain", ["Portugal", "Spain"]);
    assert_eq!(field.selected(), "Spain");
}

#[test]
fn test_select_set_options_clears_stale_selection() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut field = SelectFormField::new("Country", "", ["Portugal", "Spain"])
        .on_changed(move |value| sink.borrow_mut().push(value.to_string()));
    let _ = field.set_selected("Spain").unwrap();

    let update = field.set_options(["Spain", "France"]);
    assert!(update.repaint);
    assert!(!update.changed);
    assert_eq!(field.selected(), "Spain");

    let update = field.set_options(["France"]);
    assert!(update.repaint);
    assert!(update.changed);
    assert_eq!(field.selected(), "");
    assert_eq!(*seen.borrow(), vec!["Spain".to_string(), String::new()]);
}

#[test]
fn test_select_placeholder_shown_when_empty() {
    let field = SelectFormField::new("Country", "", ["Portugal"]).placeholder("Pick one");
    assert_eq!(field.presentation().placeholder.as_deref(), Some("Pick one"));
}

#[test]
fn test_select_entry_accepts_free_text() {
    let mut field = SelectEntryFormField::new("Fruit", "", ["Apple", "Apricot", "Banana"]);
    assert_eq!(field.state().label_phase(), LabelPhase::Inline);

    let _ = field.type_str("ap");
    assert_eq!(field.text(), "ap");
    assert_eq!(field.matching_options(), vec!["Apple", "Apricot"]);

    let _ = field.set_options(["Cherry"]);
    assert!(field.matching_options().is_empty());
    let _ = set(&mut field, "Kiwi");
    assert_eq!(field.text(), "Kiwi");
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_min_size() {
    let field = TextFormField::new("A very long label indeed", "");
    let size = field.presentation().min_size(&FixedMeasure, &DefaultTheme);

    // input 30 + caption 11 - 2 * border 2 + hint 10
    assert_eq!(size.height, 47.0);
    // 4 * padding 4 + 24 chars * 11 * 0.5
    assert_eq!(size.width, 148.0);
}

#[test]
fn test_min_size_uses_input_width_for_short_labels() {
    let field = TextFormField::new("Name", "");
    let size = field.presentation().min_size(&FixedMeasure, &DefaultTheme);
    assert_eq!(size.width, 100.0);
}
