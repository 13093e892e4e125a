//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;
use std::time::Duration;

use textfield::clipboard::MemoryClipboard;
use textfield::glyphs::MonospaceMetrics;
use textfield::keymap::{KeyCode, Keystroke, Modifiers};
use textfield::messages::{KeyMsg, Msg};
use textfield::{update, FieldId, Group, Stage, TextField, TextFieldStyle};

/// Monospace font: 10px advance, 20px line height
pub fn test_font() -> Rc<MonospaceMetrics> {
    Rc::new(MonospaceMetrics::new(10.0, 20.0))
}

/// Field with the default dark style (10px left/right insets)
pub fn test_field(text: &str) -> TextField {
    TextField::new(text, TextFieldStyle::default_dark(), test_font())
}

/// Stage holding a single field with keyboard focus and the cursor placed
pub fn test_stage(text: &str, cursor: usize) -> (Stage, FieldId) {
    let field = test_field(text);
    let id = field.id();
    let mut stage = Stage::new(
        Group::default().with(field),
        Box::new(MemoryClipboard::new()),
    );
    update(&mut stage, Msg::Focus(textfield::messages::FocusMsg::Set(Some(id))));
    set_cursor(&mut stage, id, cursor);
    (stage, id)
}

/// Stage with a single focused field whose text is width-limited
pub fn test_stage_with_width(text: &str, cursor: usize, width: f32) -> (Stage, FieldId) {
    let (mut stage, id) = test_stage(text, cursor);
    if let Some(field) = stage.field_mut(id) {
        let height = field.bounds().height;
        field.set_size(width, height);
    }
    (stage, id)
}

pub fn set_cursor(stage: &mut Stage, id: FieldId, cursor: usize) {
    if let Some(field) = stage.field_mut(id) {
        field.set_cursor_position(cursor);
    }
}

pub fn field(stage: &Stage, id: FieldId) -> &TextField {
    stage.field(id).expect("field exists on stage")
}

pub fn text(stage: &Stage, id: FieldId) -> String {
    field(stage, id).text().to_string()
}

pub fn cursor(stage: &Stage, id: FieldId) -> usize {
    field(stage, id).cursor_position()
}

// ========================================================================
// Input helpers
// ========================================================================

pub fn type_text(stage: &mut Stage, s: &str) {
    for ch in s.chars() {
        update(stage, Msg::typed(ch));
    }
}

pub fn press_typed(stage: &mut Stage, key: KeyCode) {
    if let Some(msg) = Msg::typed_key(key) {
        update(stage, msg);
    }
}

pub fn key(stage: &mut Stage, key: KeyCode) {
    key_with(stage, key, Modifiers::NONE);
}

pub fn key_with(stage: &mut Stage, key: KeyCode, mods: Modifiers) {
    update(stage, Msg::Keyboard(KeyMsg::ModifiersChanged(mods)));
    update(stage, Msg::key_down(Keystroke::new(key, mods)));
}

pub fn release_key(stage: &mut Stage, key: KeyCode) {
    update(stage, Msg::key_up(key));
    update(stage, Msg::Keyboard(KeyMsg::ModifiersChanged(Modifiers::NONE)));
}

pub fn ctrl(stage: &mut Stage, c: char) {
    key_with(stage, KeyCode::Char(c), Modifiers::CTRL);
    release_key(stage, KeyCode::Char(c));
}

pub fn frame(stage: &mut Stage, ms: u64) {
    update(stage, Msg::Frame(Duration::from_millis(ms)));
}
