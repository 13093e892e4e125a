//! Render output for text fields.
//!
//! Fields never draw. Each frame the stage turns every field into a
//! [`FieldFrame`] (stage coordinates, colors already resolved) and hands it
//! to the host's [`RenderSink`].

use crate::style::Color;

use super::geometry::{Point, Rect};

/// A run of text to draw with its top-left origin
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub origin: Point,
    pub text: String,
    pub color: Color,
}

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Color,
}

/// Everything needed to draw one field this frame
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFrame {
    pub bounds: Rect,
    pub background: Option<FilledRect>,
    pub selection: Option<FilledRect>,
    /// Visible substring of the display text
    pub text: Option<TextRun>,
    /// Message text shown while empty and unfocused
    pub placeholder: Option<TextRun>,
    pub cursor: Option<FilledRect>,
}

impl FieldFrame {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            background: None,
            selection: None,
            text: None,
            placeholder: None,
            cursor: None,
        }
    }
}

/// Host-side consumer of per-frame field output
pub trait RenderSink {
    fn draw_field(&mut self, frame: &FieldFrame);
}

/// Collects frames in memory (tests, debug dumps)
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<FieldFrame>,
}

impl RenderSink for RecordingSink {
    fn draw_field(&mut self, frame: &FieldFrame) {
        self.frames.push(frame.clone());
    }
}
