//! Message types for the Elm-style architecture
//!
//! All stage state changes flow through these message types. Pointer
//! positions are in stage coordinates.

use std::time::Duration;

use crate::field::FieldId;
use crate::keymap::{KeyCode, Keystroke, Modifiers};
use crate::view::geometry::Point;

/// Pointer messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseMsg {
    /// Pointer moved (enter/exit of fields is derived from this)
    Moved(Point),
    /// Primary button went down
    Pressed(Point),
    /// Primary button went up
    Released(Point),
    /// Pointer left the window
    Left,
}

/// Keyboard messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyMsg {
    /// Key went down (navigation, shortcuts)
    Down(Keystroke),
    /// A character was typed; modifiers are read from the stage
    Typed { key: KeyCode, ch: char },
    /// Key went up (stops key repeat)
    Up(KeyCode),
    /// Modifier state changed
    ModifiersChanged(Modifiers),
}

/// Keyboard focus messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMsg {
    /// Give keyboard focus to a field (or clear it)
    Set(Option<FieldId>),
    /// Move focus to the next field in reading order
    Next { backward: bool },
}

/// Top-level message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Mouse(MouseMsg),
    Keyboard(KeyMsg),
    Focus(FocusMsg),
    /// Advance timers and cursor blink by the frame delta
    Frame(Duration),
}

// Convenience constructors for common messages
impl Msg {
    pub fn key_down(keystroke: Keystroke) -> Self {
        Msg::Keyboard(KeyMsg::Down(keystroke))
    }

    /// A printable character typed with no special key
    pub fn typed(ch: char) -> Self {
        Msg::Keyboard(KeyMsg::Typed {
            key: KeyCode::Char(ch.to_ascii_lowercase()),
            ch,
        })
    }

    /// An editing key that produces a control character (backspace, tab...)
    pub fn typed_key(key: KeyCode) -> Option<Self> {
        key.control_char()
            .map(|ch| Msg::Keyboard(KeyMsg::Typed { key, ch }))
    }

    pub fn key_up(key: KeyCode) -> Self {
        Msg::Keyboard(KeyMsg::Up(key))
    }

    pub fn press(x: f32, y: f32) -> Self {
        Msg::Mouse(MouseMsg::Pressed(Point::new(x, y)))
    }

    pub fn release(x: f32, y: f32) -> Self {
        Msg::Mouse(MouseMsg::Released(Point::new(x, y)))
    }

    pub fn move_to(x: f32, y: f32) -> Self {
        Msg::Mouse(MouseMsg::Moved(Point::new(x, y)))
    }
}

/// Events a field raises for its host while handling input.
///
/// Fields push these into an outbox; the stage drains it after every
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// User-visible text change (never raised when old == new)
    TextChanged { old: String, new: String },
    /// A press landed on the field; it wants keyboard focus
    FocusRequested,
    /// The pointer strayed too far while pressed; stop routing to this field
    PointerReleased,
    /// Tab pressed with traversal enabled
    FocusTraversal { backward: bool },
}
