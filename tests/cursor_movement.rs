//! Cursor movement tests - arrows, word jumps, home/end, key repeat

mod common;

use common::{cursor, frame, key, key_with, release_key, test_stage};
use textfield::keymap::{KeyCode, Modifiers};

// ========================================================================
// Character steps
// ========================================================================

#[test]
fn test_move_left_right() {
    let (mut stage, id) = test_stage("hello", 2);
    key(&mut stage, KeyCode::Left);
    assert_eq!(cursor(&stage, id), 1);
    key(&mut stage, KeyCode::Right);
    key(&mut stage, KeyCode::Right);
    assert_eq!(cursor(&stage, id), 3);
}

#[test]
fn test_move_left_at_start_stays() {
    let (mut stage, id) = test_stage("hello", 0);
    key(&mut stage, KeyCode::Left);
    assert_eq!(cursor(&stage, id), 0);
}

#[test]
fn test_move_right_at_end_stays() {
    let (mut stage, id) = test_stage("hello", 5);
    key(&mut stage, KeyCode::Right);
    assert_eq!(cursor(&stage, id), 5);
}

#[test]
fn test_home_end() {
    let (mut stage, id) = test_stage("hello", 2);
    key(&mut stage, KeyCode::End);
    assert_eq!(cursor(&stage, id), 5);
    key(&mut stage, KeyCode::Home);
    assert_eq!(cursor(&stage, id), 0);
}

// ========================================================================
// Word jumps
// ========================================================================

#[test]
fn test_ctrl_right_stops_after_word() {
    let (mut stage, id) = test_stage("foo bar", 0);
    key_with(&mut stage, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 3);
}

#[test]
fn test_ctrl_right_from_boundary_steps_once_then_jumps() {
    let (mut stage, id) = test_stage("foo bar", 3);
    key_with(&mut stage, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 7);
}

#[test]
fn test_ctrl_left_stops_at_word_start() {
    let (mut stage, id) = test_stage("foo bar", 7);
    key_with(&mut stage, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 4);
    key_with(&mut stage, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 0);
}

#[test]
fn test_punctuation_is_boundary() {
    let (mut stage, id) = test_stage("a.b_c", 0);
    key_with(&mut stage, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 1);
}

#[test]
fn test_password_mode_steps_single_chars() {
    let (mut stage, id) = test_stage("secret word", 0);
    if let Some(f) = stage.field_mut(id) {
        f.set_password_mode(true);
    }
    key_with(&mut stage, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(cursor(&stage, id), 1);
}

// ========================================================================
// Key repeat
// ========================================================================

#[test]
fn test_held_arrow_repeats() {
    let (mut stage, id) = test_stage("abcdef", 0);
    key(&mut stage, KeyCode::Right);
    assert_eq!(cursor(&stage, id), 1);

    frame(&mut stage, 100);
    assert_eq!(cursor(&stage, id), 1);
    frame(&mut stage, 100);
    assert_eq!(cursor(&stage, id), 2);
    frame(&mut stage, 200);
    assert_eq!(cursor(&stage, id), 3);

    release_key(&mut stage, KeyCode::Right);
    frame(&mut stage, 400);
    assert_eq!(cursor(&stage, id), 3);
    assert_eq!(stage.scheduler().pending(), 0);
}

#[test]
fn test_repeat_keeps_shift_selection_growing() {
    let (mut stage, id) = test_stage("abcdef", 0);
    key_with(&mut stage, KeyCode::Right, Modifiers::SHIFT);
    frame(&mut stage, 200);
    frame(&mut stage, 200);
    let field = stage.field(id).expect("field exists");
    assert_eq!(field.selection_start(), 0);
    assert_eq!(field.selection_text(), "abc");
}

#[test]
fn test_repeat_picks_up_shift_pressed_mid_hold() {
    let (mut stage, id) = test_stage("abcdef", 0);
    key(&mut stage, KeyCode::Right);
    textfield::update(
        &mut stage,
        textfield::Msg::Keyboard(textfield::messages::KeyMsg::ModifiersChanged(
            Modifiers::SHIFT,
        )),
    );
    frame(&mut stage, 200);
    let field = stage.field(id).expect("field exists");
    assert_eq!(field.cursor_position(), 2);
    assert_eq!(field.selection_start(), 1);
    assert_eq!(field.selection_text(), "b");
}

#[test]
fn test_focus_loss_cancels_repeat() {
    let (mut stage, id) = test_stage("abcdef", 0);
    key(&mut stage, KeyCode::Right);
    textfield::update(
        &mut stage,
        textfield::Msg::Focus(textfield::messages::FocusMsg::Set(None)),
    );
    frame(&mut stage, 1000);
    assert_eq!(cursor(&stage, id), 1);
    assert_eq!(stage.scheduler().pending(), 0);
}
