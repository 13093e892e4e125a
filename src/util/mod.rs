//! Utility modules

pub mod text;

pub use text::{is_word_boundary, is_word_char, step_cursor, word_under_cursor};
