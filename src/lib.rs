//! Textfield - single-line text input widget engine
//!
//! This crate provides the editing core of a text input control: cursor and
//! selection model, glyph layout with horizontal scrolling, the keyboard and
//! pointer state machine, clipboard-backed editing and spatial focus
//! traversal. Rendering, fonts, clipboard and timers are host services.
//!
//! State changes flow through [`update`] in the Elm Architecture style.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod editable;
pub mod field;
pub mod focus;
pub mod glyphs;
pub mod keymap;
pub mod messages;
pub mod scheduler;
pub mod stage;
pub mod style;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::FieldConfig;
pub use field::{FieldId, TextField};
pub use focus::{Group, Widget};
pub use messages::Msg;
pub use stage::Stage;
pub use style::TextFieldStyle;
pub use update::update;
