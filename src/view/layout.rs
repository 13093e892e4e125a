//! Display layout for a single-line field
//!
//! Derives the string that is actually drawn (unsupported glyphs blanked,
//! password masking), the cumulative pen position of every glyph, and the
//! horizontal viewport that keeps the cursor visible.
//!
//! The viewport is reactive: `calculate_offsets` jumps the scroll by the
//! minimum amount needed to keep the glyphs on either side of the cursor in
//! view, starting from wherever the previous call left it.

use std::ops::Range;

use crate::glyphs::GlyphMetrics;

use super::geometry::Align;

#[derive(Debug, Clone)]
pub struct DisplayLayout {
    display_text: String,
    /// One entry per display glyph plus a trailing sentinel (total width)
    glyph_positions: Vec<f32>,
    render_offset: f32,
    visible_start: usize,
    visible_end: usize,
    text_offset: f32,
    font_offset: f32,
    selection_x: f32,
    selection_width: f32,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            display_text: String::new(),
            glyph_positions: vec![0.0],
            render_offset: 0.0,
            visible_start: 0,
            visible_end: 0,
            text_offset: 0.0,
            font_offset: 0.0,
            selection_x: 0.0,
            selection_width: 0.0,
        }
    }
}

impl DisplayLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the display string and glyph positions from `text`.
    ///
    /// Characters the font lacks become spaces so indices stay aligned with
    /// the source text. `mask` replaces every glyph, but only when the font
    /// can render the mask character itself.
    pub fn rebuild(&mut self, text: &str, font: &dyn GlyphMetrics, mask: Option<char>) {
        let mut display: String = text
            .chars()
            .map(|c| if font.has_glyph(c) { c } else { ' ' })
            .collect();

        if let Some(mask) = mask.filter(|&m| font.has_glyph(m)) {
            display = std::iter::repeat(mask).take(text.chars().count()).collect();
        }

        self.glyph_positions.clear();
        let mut x = 0.0;
        for ch in display.chars() {
            self.glyph_positions.push(x);
            x += font.advance(ch);
        }
        self.glyph_positions.push(x);

        self.font_offset = display.chars().next().map_or(0.0, |c| font.bearing(c));
        self.display_text = display;

        let len = self.len();
        self.visible_start = self.visible_start.min(len);
        self.visible_end = self.visible_end.min(len);
    }

    /// Recompute the viewport for the given cursor, selection and width.
    ///
    /// `selection` is the active selection range (possibly empty); `None`
    /// when no selection is active.
    pub fn calculate_offsets(
        &mut self,
        cursor: usize,
        selection: Option<Range<usize>>,
        visible_width: f32,
        align: Align,
    ) {
        let positions = &self.glyph_positions;
        let glyph_count = positions.len();
        let length = glyph_count - 1;
        let cursor = cursor.min(length);

        // Scroll just enough to keep the glyphs around the cursor visible
        let distance = positions[cursor.saturating_sub(1)] + self.render_offset;
        if distance <= 0.0 {
            self.render_offset -= distance;
        } else {
            let index = (cursor + 1).min(glyph_count - 1);
            let min_x = positions[index] - visible_width;
            if -self.render_offset < min_x {
                self.render_offset = -min_x;
            }
        }

        let mut start = 0;
        let mut start_x = 0.0;
        if let Some(i) = positions.iter().position(|&p| p >= -self.render_offset) {
            start = i;
            start_x = positions[i];
        }

        let mut end = (cursor + 1).min(length);
        while end <= length {
            if positions[end] > start_x + visible_width {
                break;
            }
            end += 1;
        }
        let end = end.saturating_sub(1).max(start).min(length);
        let start = start.min(end);

        self.text_offset = match align {
            Align::Left => start_x + self.render_offset,
            Align::Right => visible_width - (positions[end] - start_x),
            Align::Center => ((visible_width - (positions[end] - start_x)) * 0.5).round(),
        };

        match selection {
            Some(range) => {
                let min_index = range.start.min(length);
                let max_index = range.end.min(length);
                let min_x = positions[min_index].max(-self.render_offset);
                let max_x = positions[max_index].min(visible_width - self.render_offset);
                self.selection_x = min_x;
                if self.render_offset == 0.0 {
                    self.selection_x += self.text_offset;
                }
                self.selection_width = (max_x - min_x).max(0.0);
            }
            None => {
                self.selection_x = 0.0;
                self.selection_width = 0.0;
            }
        }

        self.visible_start = start;
        self.visible_end = end;
    }

    /// Drop any horizontal scroll (backspace does this)
    pub fn reset_scroll(&mut self) {
        self.render_offset = 0.0;
    }

    // === Accessors ===

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Number of display glyphs
    pub fn len(&self) -> usize {
        self.glyph_positions.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn glyph_positions(&self) -> &[f32] {
        &self.glyph_positions
    }

    /// Total advance of the display text
    pub fn text_width(&self) -> f32 {
        self.glyph_positions[self.len()]
    }

    pub fn render_offset(&self) -> f32 {
        self.render_offset
    }

    pub fn visible_start(&self) -> usize {
        self.visible_start
    }

    pub fn visible_end(&self) -> usize {
        self.visible_end
    }

    /// The substring currently drawn
    pub fn visible_text(&self) -> String {
        self.display_text
            .chars()
            .skip(self.visible_start)
            .take(self.visible_end - self.visible_start)
            .collect()
    }

    pub fn text_offset(&self) -> f32 {
        self.text_offset
    }

    pub fn font_offset(&self) -> f32 {
        self.font_offset
    }

    pub fn selection_x(&self) -> f32 {
        self.selection_x
    }

    pub fn selection_width(&self) -> f32 {
        self.selection_width
    }

    /// Cursor x relative to the content area
    pub fn cursor_x(&self, cursor: usize) -> f32 {
        let cursor = cursor.min(self.len());
        self.text_offset + self.glyph_positions[cursor] - self.glyph_positions[self.visible_start]
            + self.font_offset
    }

    /// Selection highlight x relative to the content area
    pub fn selection_draw_x(&self) -> f32 {
        self.selection_x + self.render_offset + self.font_offset
    }
}
