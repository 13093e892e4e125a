//! Text editing primitives for the text field.
//!
//! # Architecture
//!
//! - [`TextBuffer`]: character content, cursor, selection anchor and length cap
//! - [`Selection`]: anchor/head pair with a normalized range
//! - [`EditConstraints`]: per-field restrictions (filters, Enter handling)
//! - [`CharFilter`]: the closed set of character filter strategies
//!
//! # Example
//!
//! ```ignore
//! use textfield::editable::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_text("hello");
//! buffer.set_max_length(Some(6));
//! buffer.insert_at(5, "!!");
//!
//! assert_eq!(buffer.as_str(), "hello!");
//! ```

mod buffer;
mod constraints;
mod selection;

// Re-export main types
pub use buffer::TextBuffer;
pub use constraints::{CharFilter, CharPredicate, EditConstraints, FilterContext};
pub use selection::Selection;
