//! The text field widget
//!
//! A [`TextField`] owns its buffer, constraints, display layout and input
//! state. Everything it wants from the outside world (clipboard, timers,
//! focus changes) goes through [`Services`] or its event outbox.
//!
//! - `edit`: clipboard-backed edit operations and the programmatic API
//! - `input`: keyboard/pointer state machine

mod edit;
mod input;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::clipboard::Clipboard;
use crate::config::FieldConfig;
use crate::editable::{EditConstraints, Selection, TextBuffer};
use crate::glyphs::GlyphMetrics;
use crate::messages::FieldEvent;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::style::TextFieldStyle;
use crate::view::geometry::{Align, Point, Rect};
use crate::view::layout::DisplayLayout;
use crate::view::text_field::{FieldFrame, FilledRect, TextRun};

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldId(u64);

impl FieldId {
    pub fn next() -> Self {
        FieldId(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Pointer interaction state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PointerState {
    #[default]
    Idle,
    /// Hovered
    Over,
    /// Button held after a press on the field
    Pressed,
}

/// Host collaborators a field needs while handling input
pub struct Services<'a> {
    pub clipboard: &'a mut dyn Clipboard,
    pub scheduler: &'a mut dyn Scheduler,
}

/// Cursor blink accumulator
#[derive(Debug, Clone)]
pub struct CursorBlink {
    pub visible: bool,
    elapsed: Duration,
    interval: Duration,
}

impl CursorBlink {
    pub fn new(interval: Duration) -> Self {
        Self {
            visible: true,
            elapsed: Duration::ZERO,
            interval,
        }
    }

    /// Reset blink timer (call after user input)
    pub fn reset(&mut self) {
        self.visible = true;
        self.elapsed = Duration::ZERO;
    }

    /// Returns true if the visibility flipped (needs redraw)
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.visible = !self.visible;
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

/// Multi-click detection on mouse-up, driven by the field clock
#[derive(Debug, Clone, Default)]
struct ClickTracker {
    last_click: Option<Duration>,
    click_count: u32,
}

impl ClickTracker {
    fn register(&mut self, now: Duration, interval: Duration) -> u32 {
        let rapid = self
            .last_click
            .is_some_and(|last| now.saturating_sub(last) <= interval);
        if !rapid {
            self.click_count = 0;
        }
        self.click_count += 1;
        self.last_click = Some(now);
        self.click_count
    }
}

/// A single-line text input
#[derive(Debug)]
pub struct TextField {
    id: FieldId,
    pub(crate) buffer: TextBuffer,
    pub(crate) constraints: EditConstraints,
    layout: DisplayLayout,
    layout_dirty: bool,
    style: TextFieldStyle,
    font: Rc<dyn GlyphMetrics>,

    /// Relative to the parent group
    bounds: Rect,
    preferred_width: f32,
    message_text: Option<String>,
    alignment: Align,
    password_mode: bool,
    password_char: char,
    disabled: bool,
    focus_traversal: bool,
    ignore_updates_while_focused: bool,
    programmatic_change_events: bool,

    boundary_threshold: f32,
    key_repeat_interval: Duration,
    click_interval: Duration,
    blink: CursorBlink,

    pointer: PointerState,
    focused: bool,
    key_repeat: Option<TimerHandle>,
    clicks: ClickTracker,
    clock: Duration,
    events: Vec<FieldEvent>,
}

impl TextField {
    /// Create a field with the default configuration
    pub fn new(text: &str, style: TextFieldStyle, font: Rc<dyn GlyphMetrics>) -> Self {
        Self::with_config(text, style, font, &FieldConfig::default())
    }

    pub fn with_config(
        text: &str,
        style: TextFieldStyle,
        font: Rc<dyn GlyphMetrics>,
        config: &FieldConfig,
    ) -> Self {
        let mut buffer = TextBuffer::new();
        buffer.set_max_length(config.max_length);

        let mut field = Self {
            id: FieldId::next(),
            buffer,
            constraints: EditConstraints {
                write_enters: config.write_enters,
                only_font_chars: config.only_font_chars,
                char_filter: None,
            },
            layout: DisplayLayout::new(),
            layout_dirty: true,
            style,
            font,
            bounds: Rect::default(),
            preferred_width: config.preferred_width,
            message_text: None,
            alignment: Align::Left,
            password_mode: false,
            password_char: config.password_char,
            disabled: false,
            focus_traversal: config.focus_traversal,
            ignore_updates_while_focused: config.ignore_updates_while_focused,
            programmatic_change_events: config.programmatic_change_events,
            boundary_threshold: config.boundary_threshold,
            key_repeat_interval: config.key_repeat_interval(),
            click_interval: config.click_interval(),
            blink: CursorBlink::new(config.blink_interval()),
            pointer: PointerState::Idle,
            focused: false,
            key_repeat: None,
            clicks: ClickTracker::default(),
            clock: Duration::ZERO,
            events: Vec::new(),
        };

        field.set_text(text);
        field.bounds = Rect::new(0.0, 0.0, field.preferred_width(), field.preferred_height());
        field
    }

    /// Create a field using the style named by `config.style`
    pub fn from_config(text: &str, font: Rc<dyn GlyphMetrics>, config: &FieldConfig) -> Self {
        let style = crate::style::load_style(&config.style).unwrap_or_else(|e| {
            tracing::warn!(style = %config.style, "Failed to load style, using default: {}", e);
            TextFieldStyle::default_dark()
        });
        Self::with_config(text, style, font, config)
    }

    /// Place the field at `(x, y)` within its parent
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.bounds.x = x;
        self.bounds.y = y;
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn selection_start(&self) -> usize {
        self.buffer.selection_start()
    }

    pub fn has_selection(&self) -> bool {
        self.buffer.has_selection()
    }

    /// The raised selection, possibly empty
    pub fn selection(&self) -> Option<Selection> {
        self.buffer.selection()
    }

    /// Selected text, empty when nothing is selected
    pub fn selection_text(&self) -> String {
        self.buffer.selected_text()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn cursor_visible(&self) -> bool {
        self.blink.visible
    }

    /// Drain events raised since the last call
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    // === Configuration ===

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    pub fn preferred_width(&self) -> f32 {
        self.preferred_width
    }

    pub fn set_preferred_width(&mut self, width: f32) {
        self.preferred_width = width;
    }

    /// Line height, grown by the background's vertical insets and min height
    pub fn preferred_height(&self) -> f32 {
        let line_height = self.font.line_height();
        match self.style.background {
            Some(bg) => (line_height + bg.insets.vertical()).max(bg.min_height),
            None => line_height,
        }
    }

    pub fn style(&self) -> &TextFieldStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextFieldStyle) {
        self.style = style;
    }

    pub fn font(&self) -> &Rc<dyn GlyphMetrics> {
        &self.font
    }

    pub fn set_font(&mut self, font: Rc<dyn GlyphMetrics>) {
        self.font = font;
        self.layout_dirty = true;
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    pub fn set_constraints(&mut self, constraints: EditConstraints) {
        self.constraints = constraints;
    }

    pub fn max_length(&self) -> Option<usize> {
        self.buffer.max_length()
    }

    /// `None` or `Some(0)` removes the cap
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.buffer.set_max_length(max_length);
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message_text.as_deref()
    }

    /// Text drawn while the field is empty and unfocused
    pub fn set_message_text(&mut self, text: Option<String>) {
        self.message_text = text;
    }

    pub fn alignment(&self) -> Align {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Align) {
        self.alignment = alignment;
    }

    pub fn is_password_mode(&self) -> bool {
        self.password_mode
    }

    pub fn set_password_mode(&mut self, password_mode: bool) {
        self.password_mode = password_mode;
        self.layout_dirty = true;
    }

    pub fn password_char(&self) -> char {
        self.password_char
    }

    pub fn set_password_char(&mut self, ch: char) {
        self.password_char = ch;
        self.layout_dirty = true;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn focus_traversal(&self) -> bool {
        self.focus_traversal
    }

    /// Tab / shift+tab move focus instead of typing
    pub fn set_focus_traversal(&mut self, enabled: bool) {
        self.focus_traversal = enabled;
    }

    /// Whether traversal may land on this field
    pub fn is_traversable(&self) -> bool {
        !self.disabled && self.focus_traversal
    }

    pub fn set_ignore_updates_while_focused(&mut self, ignore: bool) {
        self.ignore_updates_while_focused = ignore;
    }

    pub fn set_programmatic_change_events(&mut self, enabled: bool) {
        self.programmatic_change_events = enabled;
    }

    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blink.interval = interval;
    }

    pub fn set_key_repeat_interval(&mut self, interval: Duration) {
        self.key_repeat_interval = interval;
    }

    pub fn set_boundary_threshold(&mut self, threshold: f32) {
        self.boundary_threshold = threshold;
    }

    // === Time ===

    /// Advance the field clock. Returns true when the cursor blinked.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.clock += dt;
        if self.focused && !self.disabled {
            self.blink.advance(dt)
        } else {
            false
        }
    }

    // === Layout ===

    /// Width available to text after the background insets
    pub fn visible_width(&self) -> f32 {
        (self.bounds.width - self.style.padding().horizontal()).max(0.0)
    }

    fn refresh_layout(&mut self) {
        if self.layout_dirty {
            let mask = self.password_mode.then_some(self.password_char);
            self.layout
                .rebuild(self.buffer.as_str(), self.font.as_ref(), mask);
            self.layout_dirty = false;
        }

        self.buffer.clamp();
        let selection = self.buffer.selection().map(|s| s.range());
        let width = self.visible_width();
        self.layout
            .calculate_offsets(self.buffer.cursor(), selection, width, self.alignment);
    }

    /// Up-to-date display layout
    pub fn layout(&mut self) -> &DisplayLayout {
        self.refresh_layout();
        &self.layout
    }

    pub(crate) fn invalidate_layout(&mut self) {
        self.layout_dirty = true;
    }

    // === Rendering ===

    /// Compute this frame's draw data. `origin` is the parent's stage
    /// position.
    pub fn frame(&mut self, origin: Point) -> FieldFrame {
        self.refresh_layout();

        let bounds = self.bounds.translated(origin);
        let padding = self.style.padding();
        let line_height = self.font.line_height();
        let content_x = bounds.x + padding.left;
        let content_height = bounds.height - padding.vertical();
        let text_y = bounds.y + padding.top + ((content_height - line_height) / 2.0).round();

        let mut frame = FieldFrame::new(bounds);

        frame.background = self
            .style
            .background_for(self.disabled, self.focused)
            .map(|bg| FilledRect {
                rect: bounds,
                color: bg.color,
            });

        if self.focused && self.buffer.selected_range().is_some() {
            if let Some(color) = self.style.selection {
                frame.selection = Some(FilledRect {
                    rect: Rect::new(
                        content_x + self.layout.selection_draw_x(),
                        text_y,
                        self.layout.selection_width(),
                        line_height,
                    ),
                    color,
                });
            }
        }

        if self.layout.is_empty() {
            if let (false, Some(message)) = (self.focused, self.message_text.as_ref()) {
                frame.placeholder = Some(TextRun {
                    origin: Point::new(content_x, text_y),
                    text: message.clone(),
                    color: self.style.message_color(),
                });
            }
        } else {
            frame.text = Some(TextRun {
                origin: Point::new(content_x + self.layout.text_offset(), text_y),
                text: self.layout.visible_text(),
                color: self.style.font_color_for(self.disabled, self.focused),
            });
        }

        if self.focused && !self.disabled && self.blink.visible {
            if let Some(cursor) = self.style.cursor {
                frame.cursor = Some(FilledRect {
                    rect: Rect::new(
                        content_x + self.layout.cursor_x(self.buffer.cursor()) - 1.0,
                        text_y,
                        cursor.width,
                        line_height,
                    ),
                    color: cursor.color,
                });
            }
        }

        frame
    }

    // === Invariants ===

    /// Verify buffer and layout invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let len = self.buffer.len_chars();
        debug_assert!(
            self.buffer.cursor() <= len,
            "cursor {} beyond text length {}",
            self.buffer.cursor(),
            len
        );
        if self.buffer.has_selection() {
            debug_assert!(
                self.buffer.selection_start() <= len,
                "selection start {} beyond text length {}",
                self.buffer.selection_start(),
                len
            );
        }
        if !self.layout_dirty {
            let positions = self.layout.glyph_positions();
            debug_assert_eq!(positions.len(), len + 1, "glyph positions out of sync");
            debug_assert!(
                positions.windows(2).all(|w| w[0] <= w[1]),
                "glyph positions must be non-decreasing"
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
