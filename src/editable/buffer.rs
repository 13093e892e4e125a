//! TextBuffer: the authoritative character sequence of a text field together
//! with its cursor and selection anchor.
//!
//! All indices are character offsets (not bytes). The buffer keeps
//! `cursor` and the selection anchor clamped into `0..=len_chars()` after
//! every mutation.

use std::ops::Range;

use super::selection::Selection;

/// Text content, cursor and selection state for a single-line input.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    selection_start: usize,
    has_selection: bool,
    /// Maximum length in characters (None = unlimited)
    max_length: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string slice, cursor at the start.
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            ..Self::default()
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters as a vector, for index-based scanning
    pub fn chars(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Get slice of text as String (by character indices)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    // === Length limit ===

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set the length cap. `Some(0)` and `None` both mean unbounded.
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length.filter(|&max| max > 0);
    }

    /// Check whether a buffer of `size` characters may still grow by one.
    pub fn within_max_length(&self, size: usize) -> bool {
        match self.max_length {
            Some(max) => size < max,
            None => true,
        }
    }

    // === Cursor & selection ===

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    /// Whether the selection flag is raised. The range may still be empty
    /// (e.g. right after a mouse press).
    pub fn has_selection(&self) -> bool {
        self.has_selection
    }

    /// The active selection, if the selection flag is raised
    pub fn selection(&self) -> Option<Selection> {
        self.has_selection
            .then(|| Selection::new(self.selection_start, self.cursor))
    }

    /// The active, non-empty selected range
    pub fn selected_range(&self) -> Option<Range<usize>> {
        self.selection()
            .filter(|sel| !sel.is_empty())
            .map(|sel| sel.range())
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.selected_range()
            .map(|range| self.slice(range))
            .unwrap_or_default()
    }

    /// Move the cursor and clear any selection.
    pub fn set_cursor(&mut self, pos: usize) {
        self.clear_selection();
        self.cursor = pos.min(self.len_chars());
    }

    /// Move the live cursor without touching the selection anchor.
    pub fn place_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len_chars());
    }

    /// Raise the selection flag with the anchor at `anchor`.
    pub fn anchor_selection(&mut self, anchor: usize) {
        self.selection_start = anchor.min(self.len_chars());
        self.has_selection = true;
    }

    /// Select `a..b` with `b` as the live cursor. `a == b` clears the
    /// selection instead.
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let len = self.len_chars();
        let (a, b) = (a.min(len), b.min(len));
        if a == b {
            self.clear_selection();
            return;
        }
        self.selection_start = a;
        self.cursor = b;
        self.has_selection = true;
    }

    pub fn clear_selection(&mut self) {
        self.has_selection = false;
    }

    /// Clamp cursor and anchor back into range
    pub fn clamp(&mut self) {
        let len = self.len_chars();
        self.cursor = self.cursor.min(len);
        self.selection_start = self.selection_start.min(len);
    }

    // === Content mutation ===

    /// Insert `s` at `pos`, one character at a time, stopping once the length
    /// cap is reached. Returns the number of characters inserted. The cursor
    /// is not moved.
    pub fn insert_at(&mut self, pos: usize, s: &str) -> usize {
        let mut len = self.len_chars();
        let mut byte_offset = self.char_to_byte(pos.min(len));
        let mut inserted = 0;

        for ch in s.chars() {
            if !self.within_max_length(len) {
                break;
            }
            self.text.insert(byte_offset, ch);
            byte_offset += ch.len_utf8();
            len += 1;
            inserted += 1;
        }

        inserted
    }

    /// Remove the characters in `from..to` (either order). Collapses the
    /// selection and leaves the cursor at the start of the removed range,
    /// which is returned.
    pub fn delete_range(&mut self, from: usize, to: usize) -> usize {
        let len = self.len_chars();
        let start = from.min(to).min(len);
        let end = from.max(to).min(len);

        if start < end {
            let start_byte = self.char_to_byte(start);
            let end_byte = self.char_to_byte(end);
            self.text.replace_range(start_byte..end_byte, "");
        }

        self.clear_selection();
        self.cursor = start;
        self.clamp();
        start
    }

    /// Replace the whole content verbatim. Cursor and anchor are clamped.
    /// Returns the previous content.
    pub fn set_text(&mut self, s: &str) -> String {
        let old = std::mem::replace(&mut self.text, s.to_string());
        self.clamp();
        old
    }
}
