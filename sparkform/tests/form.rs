//! Tests for form aggregation, buttons and callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sparkform::prelude::*;

fn required(label: &str) -> TextFormField {
    let messages = ValidationMessages::default();
    TextFormField::new(label, "").validator(Validator::not_empty(&messages))
}

fn recording_repaint() -> (Rc<RefCell<Vec<RepaintTarget>>>, impl Repaint + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |target: RepaintTarget| sink.borrow_mut().push(target))
}

fn id(form: &Form, label: &str) -> FieldId {
    form.find(label).unwrap()
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
// Aggregate validity
// =============================================================================

#[test]
fn test_name_scenario() {
    let mut form = Form::new(1, [required("Name")]);
    let name = id(&form, "Name");

    assert!(!form.is_valid());
    form.set_text(name, "Jorge").unwrap();
    assert!(form.is_valid());

    form.focus(name).unwrap();
    form.set_text(name, "").unwrap();
    assert!(!form.is_valid());
    assert!(!form.presentation(name).unwrap().error_visible);

    form.blur();
    let presentation = form.presentation(name).unwrap();
    assert!(presentation.error_visible);
    assert_eq!(presentation.hint, "This field cannot be empty");
}

#[test]
fn test_prefilled_invalid_field_shows_no_error_before_interaction() {
    let messages = ValidationMessages::default();
    let form = Form::new(
        1,
        [TextFormField::new("Code", "ab").validator(Validator::min_length(3, &messages))],
    );
    let code = id(&form, "Code");

    assert!(!form.validity());
    assert!(!form.field(code).unwrap().state().is_dirty());
    let presentation = form.presentation(code).unwrap();
    assert!(!presentation.error_visible);
    assert_eq!(presentation.hint_color, ColorRole::Placeholder);
}

#[test]
fn test_construction_matches_state_after_reset() {
    let messages = ValidationMessages::default();
    let mut form = Form::new(
        1,
        [TextFormField::new("Code", "ab").validator(Validator::min_length(3, &messages))],
    );
    let code = id(&form, "Code");
    let built = form.presentation(code).unwrap();
    let built_dirty = form.field(code).unwrap().state().is_dirty();

    form.set_text(code, "abcd").unwrap();
    form.reset();

    assert_eq!(form.presentation(code).unwrap(), built);
    assert_eq!(form.field(code).unwrap().state().is_dirty(), built_dirty);
}

#[test]
fn test_two_fields_enable_button_once() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut form = Form::builder()
        .field(required("A"))
        .field(required("B"))
        .on_validation_changed(move |valid| sink.borrow_mut().push(valid))
        .build();
    let submit = form.create_submit_button("Submit", |_form| {});
    let (a, b) = (id(&form, "A"), id(&form, "B"));

    assert_eq!(*changes.borrow(), vec![false]);
    assert!(!form.button(submit).unwrap().is_enabled());

    form.set_text(a, "filled").unwrap();
    assert!(!form.button(submit).unwrap().is_enabled());
    assert_eq!(*changes.borrow(), vec![false]);

    form.set_text(b, "filled").unwrap();
    assert!(form.button(submit).unwrap().is_enabled());
    assert_eq!(*changes.borrow(), vec![false, true]);
}

#[test]
fn test_all_submit_buttons_stay_in_sync() {
    let mut form = Form::new(1, [required("Name")]);
    let first = form.create_submit_button("Send", |_form| {});
    let second = form.create_submit_button("Send again", |_form| {});
    let name = id(&form, "Name");

    form.set_text(name, "x").unwrap();
    assert!(form.button(first).unwrap().is_enabled());
    assert!(form.button(second).unwrap().is_enabled());

    form.set_text(name, "").unwrap();
    assert!(!form.button(first).unwrap().is_enabled());
    assert!(!form.button(second).unwrap().is_enabled());
}

#[test]
fn test_submit_button_mirrors_validity_on_creation() {
    let mut form = Form::new(1, [TextFormField::new("Optional", "")]);
    let submit = form.create_submit_button("Send", |_form| {});
    assert!(form.button(submit).unwrap().is_enabled());
    assert_eq!(form.button(submit).unwrap().kind(), ButtonKind::Submit);
}

#[test]
fn test_validity_independent_of_field_order() {
    let messages = ValidationMessages::default();
    let fields = || {
        vec![
            TextFormField::new("Name", "Jorge").validator(Validator::not_empty(&messages)),
            TextFormField::new("Email", "nope").validator(Validator::email(&messages)),
        ]
    };

    let mut forward = Form::new(1, fields());
    let mut backward = Form::new(1, fields().into_iter().rev());
    assert!(!forward.is_valid());
    assert_eq!(forward.is_valid(), backward.is_valid());
}

#[test]
fn test_is_valid_does_not_touch_display_state() {
    let mut form = Form::new(1, [required("Name")]);
    let name = id(&form, "Name");

    assert!(!form.is_valid());
    let field = form.field(name).unwrap();
    assert!(!field.state().is_dirty());
    assert!(!field.state().is_focused());
    assert!(!form.presentation(name).unwrap().error_visible);
}

#[test]
fn test_on_changed_fires_before_validity_callback() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let changed = Rc::clone(&events);
    let validity = Rc::clone(&events);
    let mut form = Form::builder()
        .field(required("Name"))
        .on_changed(move || changed.borrow_mut().push("changed"))
        .on_validation_changed(move |_| validity.borrow_mut().push("validity"))
        .build();
    events.borrow_mut().clear();

    let name = id(&form, "Name");
    form.set_text(name, "x").unwrap();
    assert_eq!(*events.borrow(), vec!["changed", "validity"]);

    form.set_text(name, "xy").unwrap();
    assert_eq!(*events.borrow(), vec!["changed", "validity", "changed"]);
}

#[test]
fn test_form_without_fields_is_valid() {
    let mut form = Form::new(1, Vec::<FormField>::new());
    assert!(form.is_valid());
}

// =============================================================================
// Reset and save
// =============================================================================

#[test]
fn test_reset_restores_every_field() {
    let changed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changed);
    let mut form = Form::builder()
        .field(TextFormField::new("First", "Ada"))
        .field(TextFormField::new("Last", ""))
        .on_changed(move || counter.set(counter.get() + 1))
        .build();
    let (first, last) = (id(&form, "First"), id(&form, "Last"));

    form.set_text(first, "Grace").unwrap();
    form.set_text(last, "Hopper").unwrap();
    changed.set(0);

    form.reset();
    assert_eq!(form.field(first).unwrap().text(), "Ada");
    assert_eq!(form.field(last).unwrap().text(), "");
    assert!(!form.field(first).unwrap().state().is_dirty());
    assert_eq!(changed.get(), 2);
}

#[test]
fn test_reset_button() {
    let mut form = Form::new(1, [required("Name")]);
    let reset = form.create_reset_button("Clear");
    let name = id(&form, "Name");
    form.set_text(name, "Jorge").unwrap();

    assert!(form.tap_button(reset).unwrap());
    assert_eq!(form.field(name).unwrap().text(), "");
    assert!(!form.validity());
    assert!(form.button(reset).unwrap().is_enabled());
}

#[test]
fn test_save_in_insertion_order_without_validity_gate() {
    let saved = Rc::new(RefCell::new(Vec::new()));
    let (a_sink, b_sink) = (Rc::clone(&saved), Rc::clone(&saved));
    let messages = ValidationMessages::default();
    let mut form = Form::new(
        1,
        [
            TextFormField::new("A", "1")
                .on_saved(move |v| a_sink.borrow_mut().push(format!("a:{}", v))),
            TextFormField::new("B", "")
                .validator(Validator::not_empty(&messages))
                .on_saved(move |v| b_sink.borrow_mut().push(format!("b:{}", v))),
        ],
    );

    assert!(!form.is_valid());
    form.save();
    assert_eq!(*saved.borrow(), vec!["a:1".to_string(), "b:".to_string()]);
}

// =============================================================================
// Submit
// =============================================================================

#[test]
fn test_disabled_submit_ignores_tap() {
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    let mut form = Form::new(1, [required("Name")]);
    let submit = form.create_submit_button("Send", move |_form| counter.set(counter.get() + 1));

    assert!(!form.tap_button(submit).unwrap());
    assert_eq!(taps.get(), 0);

    let name = id(&form, "Name");
    form.set_text(name, "Jorge").unwrap();
    assert!(form.tap_button(submit).unwrap());
    assert_eq!(taps.get(), 1);
}

#[test]
fn test_submit_callback_can_use_the_form() {
    let saved = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&saved);
    let mut form = Form::new(
        1,
        [TextFormField::new("Name", "Jorge")
            .on_saved(move |v| *sink.borrow_mut() = Some(v.to_string()))],
    );
    let submit = form.create_submit_button("Send", |form| {
        if form.is_valid() {
            form.save();
        }
    });

    assert!(form.tap_button(submit).unwrap());
    assert_eq!(saved.borrow().as_deref(), Some("Jorge"));

    // The callback is put back after running.
    saved.borrow_mut().take();
    assert!(form.tap_button(submit).unwrap());
    assert!(saved.borrow().is_some());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unknown_ids() {
    let other = Form::new(1, [required("A"), required("B"), required("C")]);
    let stranger = id(&other, "C");

    let mut form = Form::new(1, [required("A")]);
    assert!(matches!(
        form.set_text(stranger, "x"),
        Err(FormError::UnknownField(field)) if field == stranger
    ));
    assert!(matches!(
        form.focus(stranger),
        Err(FormError::UnknownField(_))
    ));
}

#[test]
fn test_unknown_button() {
    let mut other = Form::new(1, [required("A")]);
    other.create_reset_button("one");
    let stranger = other.create_reset_button("two");

    let mut form = Form::new(1, [required("A")]);
    assert!(matches!(
        form.tap_button(stranger),
        Err(FormError::UnknownButton(_))
    ));
}

#[test]
fn test_kind_mismatch() {
    let mut form = Form::new(
        1,
        [
            FormField::from(required("Name")),
            FormField::from(SelectFormField::new("Country", "", ["Portugal"])),
        ],
    );
    let (name, country) = (id(&form, "Name"), id(&form, "Country"));

    assert!(matches!(
        form.set_selected(name, "Portugal"),
        Err(FormError::KindMismatch { expected: "select", .. })
    ));
    assert!(matches!(
        form.type_char(country, 'x'),
        Err(FormError::KindMismatch { .. })
    ));
    assert!(matches!(
        form.type_text(country, ""),
        Err(FormError::KindMismatch { .. })
    ));
    assert!(matches!(
        form.set_options(name, vec!["x".to_string()]),
        Err(FormError::KindMismatch { .. })
    ));
}

#[test]
fn test_select_through_form() {
    let messages = ValidationMessages::default();
    let mut form = Form::new(
        1,
        [SelectFormField::new("Country", "", ["Portugal", "Spain"])
            .validator(Validator::not_empty(&messages))],
    );
    let country = id(&form, "Country");
    assert!(!form.validity());

    assert!(matches!(
        form.set_selected(country, "Atlantis"),
        Err(FormError::UnknownOption { .. })
    ));
    form.set_selected(country, "Spain").unwrap();
    assert!(form.validity());

    form.set_options(country, vec!["Spain".to_string(), "France".to_string()]).unwrap();
    assert_eq!(form.field(country).unwrap().text(), "Spain");
    assert!(form.validity());

    form.set_options(country, vec!["France".to_string()]).unwrap();
    assert_eq!(
        form.field(country).unwrap().options(),
        Some(&["France".to_string()][..])
    );
    assert_eq!(form.field(country).unwrap().text(), "");
    assert!(!form.validity());
}

// =============================================================================
// Collaborators
// =============================================================================

#[test]
fn test_repaint_requests() {
    let (log, repaint) = recording_repaint();
    let mut form = Form::builder()
        .field(required("Name"))
        .repaint(repaint)
        .build();
    let submit = form.create_submit_button("Send", |_form| {});
    let name = id(&form, "Name");

    form.set_text(name, "x").unwrap();
    assert_eq!(
        *log.borrow(),
        vec![RepaintTarget::Field(name), RepaintTarget::Button(submit)]
    );

    log.borrow_mut().clear();
    form.set_text(name, "x").unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn test_typing_goes_through_the_form() {
    let mut form = Form::new(1, [required("Name")]);
    let name = id(&form, "Name");

    form.type_text(name, "Jo").unwrap();
    assert!(form.validity());
    form.backspace(name).unwrap();
    form.backspace(name).unwrap();
    assert!(!form.validity());
    form.type_char(name, 'J').unwrap();
    assert_eq!(form.field(name).unwrap().text(), "J");
}

#[test]
fn test_type_text_notifies_once_per_character() {
    let form_calls = Rc::new(Cell::new(0));
    let field_calls = Rc::new(Cell::new(0));
    let (form_counter, field_counter) = (Rc::clone(&form_calls), Rc::clone(&field_calls));
    let mut form = Form::builder()
        .field(TextFormField::new("Name", "").on_changed(move |_| {
            field_counter.set(field_counter.get() + 1)
        }))
        .on_changed(move || form_counter.set(form_counter.get() + 1))
        .build();
    let name = id(&form, "Name");

    form.type_text(name, "Jorge").unwrap();
    assert_eq!(field_calls.get(), 5);
    assert_eq!(form_calls.get(), 5);
    assert_eq!(form.field(name).unwrap().text(), "Jorge");
}

// =============================================================================
// Layout and configuration
// =============================================================================

#[test]
fn test_grid_cell() {
    let form = Form::new(2, [required("A"), required("B"), required("C")]);
    assert_eq!(form.columns(), 2);
    assert_eq!(form.grid_cell(0), (0, 0));
    assert_eq!(form.grid_cell(1), (0, 1));
    assert_eq!(form.grid_cell(3), (1, 1));
}

#[test]
fn test_zero_columns_means_one() {
    let form = Form::new(0, [required("A")]);
    assert_eq!(form.columns(), 1);
    assert_eq!(form.grid_cell(2), (2, 0));
}

#[test]
fn test_form_min_size() {
    let form = Form::new(2, [required("A"), required("B"), required("C")]);
    let size = form.min_size(&FixedMeasure);

    // cells are 100 x 47, two columns and two rows with padding 4
    assert_eq!(size.width, 204.0);
    assert_eq!(size.height, 98.0);
}

#[test]
fn test_form_config_from_json() {
    let config: FormConfig =
        serde_json::from_str(r#"{ "columns": 2, "animation": { "duration_ms": 0 } }"#).unwrap();
    assert_eq!(config.columns, 2);
    assert_eq!(config.animation.duration_ms, 0);
    assert_eq!(config.animation.easing, Easing::EaseOut);
    assert_eq!(config.messages, ValidationMessages::default());

    let form = Form::builder()
        .config(&config)
        .field(required("Name"))
        .build();
    assert_eq!(form.columns(), 2);
    assert_eq!(
        form.fields()[0].state().label().config(),
        config.animation
    );
}
