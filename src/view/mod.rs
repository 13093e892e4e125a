//! Layout, hit-testing and render output for text fields

pub mod geometry;
pub mod layout;
pub mod text_field;

pub use geometry::{Align, Insets, Point, Rect};
pub use hit_test::letter_under_cursor;
pub use layout::DisplayLayout;
pub use text_field::{FieldFrame, FilledRect, RecordingSink, RenderSink, TextRun};
