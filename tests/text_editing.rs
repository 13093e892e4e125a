//! Text editing tests - typing, deletion, filters, length limits

mod common;

use common::{cursor, press_typed, test_stage, text, type_text};
use textfield::clipboard::Clipboard;
use textfield::editable::{CharFilter, EditConstraints};
use textfield::keymap::KeyCode;
use textfield::messages::Msg;
use textfield::update;

// ========================================================================
// Insertion
// ========================================================================

#[test]
fn test_insert_char_at_start() {
    let (mut stage, id) = test_stage("hello", 0);
    type_text(&mut stage, "X");
    assert_eq!(text(&stage, id), "Xhello");
    assert_eq!(cursor(&stage, id), 1);
}

#[test]
fn test_insert_char_at_middle() {
    let (mut stage, id) = test_stage("hello", 2);
    type_text(&mut stage, "X");
    assert_eq!(text(&stage, id), "heXllo");
    assert_eq!(cursor(&stage, id), 3);
}

#[test]
fn test_insert_char_at_end() {
    let (mut stage, id) = test_stage("hello", 5);
    type_text(&mut stage, " world");
    assert_eq!(text(&stage, id), "hello world");
    assert_eq!(cursor(&stage, id), 11);
}

#[test]
fn test_typing_reports_text_change() {
    let (mut stage, id) = test_stage("ab", 2);
    let cmd = update(&mut stage, Msg::typed('c')).expect("typing produces commands");
    assert_eq!(cmd.text_changes(), vec![(id, "ab", "abc")]);
}

#[test]
fn test_unsupported_glyph_rejected() {
    let (mut stage, id) = test_stage("ab", 2);
    let cmd = update(&mut stage, Msg::typed('é'));
    assert_eq!(text(&stage, id), "ab");
    assert!(cmd.map_or(true, |c| c.text_changes().is_empty()));
}

#[test]
fn test_unfocused_stage_ignores_typing() {
    let (mut stage, id) = test_stage("ab", 2);
    update(&mut stage, Msg::Focus(textfield::messages::FocusMsg::Set(None)));
    type_text(&mut stage, "x");
    assert_eq!(text(&stage, id), "ab");
}

// ========================================================================
// Deletion
// ========================================================================

#[test]
fn test_backspace_twice_from_end() {
    let (mut stage, id) = test_stage("hello", 5);
    press_typed(&mut stage, KeyCode::Backspace);
    press_typed(&mut stage, KeyCode::Backspace);
    assert_eq!(text(&stage, id), "hel");
    assert_eq!(cursor(&stage, id), 3);
}

#[test]
fn test_backspace_at_start_does_nothing() {
    let (mut stage, id) = test_stage("hello", 0);
    let cmd = update(
        &mut stage,
        Msg::typed_key(KeyCode::Backspace).expect("backspace has a control char"),
    );
    assert_eq!(text(&stage, id), "hello");
    assert!(cmd.map_or(true, |c| c.text_changes().is_empty()));
}

#[test]
fn test_delete_forward() {
    let (mut stage, id) = test_stage("hello", 1);
    press_typed(&mut stage, KeyCode::Delete);
    assert_eq!(text(&stage, id), "hllo");
    assert_eq!(cursor(&stage, id), 1);
}

#[test]
fn test_delete_at_end_does_nothing() {
    let (mut stage, id) = test_stage("hello", 5);
    press_typed(&mut stage, KeyCode::Delete);
    assert_eq!(text(&stage, id), "hello");
}

#[test]
fn test_backspace_removes_selection() {
    let (mut stage, id) = test_stage("hello world", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_selection(5, 11);
    }
    press_typed(&mut stage, KeyCode::Backspace);
    assert_eq!(text(&stage, id), "hello");
    assert_eq!(cursor(&stage, id), 5);
}

#[test]
fn test_typing_replaces_reversed_selection() {
    let (mut stage, id) = test_stage("hello", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_selection(4, 1);
    }
    type_text(&mut stage, "ipp");
    assert_eq!(text(&stage, id), "hippo");
    assert_eq!(cursor(&stage, id), 4);
}

// ========================================================================
// Constraints
// ========================================================================

#[test]
fn test_max_length_stops_typing() {
    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_max_length(Some(3));
    }
    type_text(&mut stage, "abcdef");
    assert_eq!(text(&stage, id), "abc");
    assert_eq!(cursor(&stage, id), 3);
}

#[test]
fn test_max_length_zero_is_unbounded() {
    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_max_length(Some(0));
    }
    type_text(&mut stage, "abcdef");
    assert_eq!(text(&stage, id), "abcdef");
}

#[test]
fn test_numeric_filter() {
    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_constraints(EditConstraints::numeric());
    }
    type_text(&mut stage, "-1a2.3");
    assert_eq!(text(&stage, id), "-123");
}

#[test]
fn test_decimal_filter_single_point() {
    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_constraints(EditConstraints::decimal());
    }
    type_text(&mut stage, "1.2.5");
    assert_eq!(text(&stage, id), "1.25");
}

#[test]
fn test_decimal_filter_single_point_in_paste() {
    let (mut stage, id) = test_stage("", 0);
    stage.clipboard_mut().set_contents("1.2.3".into());
    if let Some(f) = stage.field_mut(id) {
        f.set_constraints(EditConstraints::decimal());
    }
    common::ctrl(&mut stage, 'v');
    assert_eq!(text(&stage, id), "1.23");
    assert_eq!(cursor(&stage, id), 4);
}

#[test]
fn test_boolean_filter_coerces() {
    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_constraints(EditConstraints::boolean());
    }
    let cmd = update(&mut stage, Msg::typed('t'));
    assert_eq!(text(&stage, id), "true");
    assert!(cmd.map_or(true, |c| c.text_changes().is_empty()));

    type_text(&mut stage, "f");
    assert_eq!(text(&stage, id), "false");
}

#[test]
fn test_custom_filter() {
    fn no_vowels(_text: &str, ch: char) -> bool {
        !"aeiou".contains(ch)
    }

    let (mut stage, id) = test_stage("", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_constraints(EditConstraints {
            char_filter: Some(CharFilter::Custom(no_vowels)),
            ..EditConstraints::single_line()
        });
    }
    type_text(&mut stage, "textfield");
    assert_eq!(text(&stage, id), "txtfld");
}

#[test]
fn test_enter_ignored_in_single_line() {
    let (mut stage, id) = test_stage("ab", 2);
    press_typed(&mut stage, KeyCode::Enter);
    assert_eq!(text(&stage, id), "ab");
}

#[test]
fn test_disabled_field_ignores_typing() {
    let (mut stage, id) = test_stage("ab", 2);
    if let Some(f) = stage.field_mut(id) {
        f.set_disabled(true);
    }
    type_text(&mut stage, "c");
    press_typed(&mut stage, KeyCode::Backspace);
    assert_eq!(text(&stage, id), "ab");
}
