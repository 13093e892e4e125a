//! Edit operations and the programmatic text API

use crate::clipboard::Clipboard;
use crate::editable::FilterContext;
use crate::messages::FieldEvent;
use crate::util::text::step_cursor;

use super::TextField;

impl TextField {
    // === Change notification ===

    /// Record a content change. Raises `TextChanged` only when `fire` is set
    /// and the text actually differs.
    pub(crate) fn notify_change(&mut self, old: String, fire: bool) {
        self.invalidate_layout();
        if fire && old != self.buffer.as_str() {
            tracing::trace!(target: "field", field = ?self.id(), "text changed");
            self.events.push(FieldEvent::TextChanged {
                old,
                new: self.buffer.as_str().to_string(),
            });
        }
    }

    /// Remove the selected range (possibly empty) and return the new cursor
    pub(crate) fn delete_selection(&mut self, fire: bool) -> usize {
        let old = self.buffer.as_str().to_string();
        let start = self
            .buffer
            .delete_range(self.buffer.selection_start(), self.buffer.cursor());
        self.notify_change(old, fire);
        start
    }

    // === Clipboard ===

    /// Copy the selection. Disabled in password mode.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        if self.is_password_mode() {
            return;
        }
        if let Some(range) = self.buffer.selected_range() {
            clipboard.set_contents(self.buffer.slice(range));
        }
    }

    /// Copy then delete the selection, raising a change event when
    /// programmatic change events are enabled
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        let fire = self.programmatic_change_events;
        self.cut_with(clipboard, fire);
    }

    pub(crate) fn cut_with(&mut self, clipboard: &mut dyn Clipboard, fire: bool) {
        if self.is_password_mode() || self.buffer.selected_range().is_none() {
            return;
        }
        self.copy(clipboard);
        self.delete_selection(fire);
    }

    /// Insert `content` at the cursor, replacing the selection.
    ///
    /// Characters the font lacks or the filter rejects are skipped. Insertion
    /// stops once the length cap would be exceeded, counting the selection as
    /// already removed.
    pub(crate) fn paste(&mut self, content: Option<&str>, fire: bool) {
        let Some(content) = content else {
            return;
        };

        let selected = self.buffer.selection().map_or(0, |sel| sel.len());
        let text_len = self.buffer.len_chars() - selected;

        let mut accepted = String::with_capacity(content.len());
        let mut accepted_len = 0;
        let mut forced = None;
        // filters see what this paste has already let through
        let mut seen = self.buffer.as_str().to_string();
        for ch in content.chars() {
            if !self.buffer.within_max_length(text_len + accepted_len) {
                break;
            }
            if !(self.constraints.write_enters && ch == '\r') {
                if self.constraints.only_font_chars && !self.font.has_glyph(ch) {
                    continue;
                }
                let mut ctx = FilterContext::new(&seen);
                if !self.constraints.is_char_allowed(&mut ctx, ch) {
                    if let Some(text) = ctx.into_forced_text() {
                        forced = Some(text);
                    }
                    continue;
                }
            }
            accepted.push(ch);
            seen.push(ch);
            accepted_len += 1;
        }

        if self.buffer.has_selection() {
            self.delete_selection(fire);
        }

        let old = self.buffer.as_str().to_string();
        let cursor = self.buffer.cursor();
        let inserted = self.buffer.insert_at(cursor, &accepted);
        self.notify_change(old, fire);
        self.buffer.place_cursor(cursor + inserted);

        if let Some(text) = forced {
            self.set_text_forced(&text);
        }
    }

    /// Paste from the clipboard, as ctrl+V does
    pub fn paste_from(&mut self, clipboard: &mut dyn Clipboard) {
        let content = clipboard.contents();
        self.paste(content.as_deref(), true);
    }

    // === Programmatic text ===

    /// Replace the text, applying the same filtering as a paste.
    ///
    /// Ignored while focused when updates-while-focused are ignored. The
    /// cursor ends at 0 and the selection is cleared.
    pub fn set_text(&mut self, text: &str) {
        if self.ignore_updates_while_focused && self.is_focused() {
            return;
        }
        if text == self.buffer.as_str() {
            return;
        }

        self.buffer.clear_selection();
        let old = self.buffer.set_text("");
        self.paste(Some(text), false);
        self.notify_change(old, self.programmatic_change_events);
        self.buffer.set_cursor(0);
    }

    /// Append at the end of the text, applying paste filtering
    pub fn append_text(&mut self, text: &str) {
        if self.ignore_updates_while_focused && self.is_focused() {
            return;
        }

        self.buffer.clear_selection();
        self.buffer.place_cursor(self.buffer.len_chars());
        self.paste(Some(text), self.programmatic_change_events);
    }

    /// Replace the text verbatim: no filtering, no length cap, no event
    pub fn set_text_forced(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.invalidate_layout();
    }

    // === Cursor & selection ===

    pub fn select_all(&mut self) {
        let len = self.buffer.len_chars();
        self.buffer.set_selection(0, len);
    }

    /// Select `a..b`, with `b` as the live cursor
    pub fn set_selection(&mut self, a: usize, b: usize) {
        self.buffer.set_selection(a, b);
    }

    pub fn clear_selection(&mut self) {
        self.buffer.clear_selection();
    }

    /// Move the cursor, clearing the selection
    pub fn set_cursor_position(&mut self, pos: usize) {
        self.buffer.set_cursor(pos);
    }

    /// Step the cursor one character, or one word when `jump` is set
    pub(crate) fn move_cursor(&mut self, forward: bool, jump: bool) {
        let chars = self.buffer.chars();
        let cursor = step_cursor(&chars, self.buffer.cursor(), forward, jump);
        self.buffer.place_cursor(cursor);
    }
}
