//! Keyboard input types
//!
//! ```text
//! winit::KeyEvent → Keystroke / typed char → Msg::Keyboard
//! ```

mod types;
mod winit_adapter;

pub use types::{KeyCode, Keystroke, Modifiers, Motion, Shortcut};
pub use winit_adapter::{
    key_code_from_winit, keystroke_from_winit, modifiers_from_winit, typed_char_from_winit,
};
