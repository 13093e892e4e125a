//! Keyboard and pointer handling for a single field
//!
//! Pointer positions here are local to the field: `(0, 0)` is the top-left
//! corner of its bounds.

use crate::keymap::{KeyCode, Keystroke, Modifiers, Motion, Shortcut};
use crate::messages::FieldEvent;
use crate::scheduler::{Scheduler, TimerTask};
use crate::util::text::word_under_cursor;
use crate::view::geometry::{Point, Rect};
use crate::view::hit_test::letter_under_cursor;

use super::{PointerState, Services, TextField};

impl TextField {
    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Shortcuts and navigation. Arrow keys schedule a key repeat.
    pub fn key_down(&mut self, stroke: Keystroke, services: &mut Services<'_>) {
        if self.is_disabled() {
            return;
        }
        self.blink.reset();

        if let Some(shortcut) = stroke.shortcut() {
            match shortcut {
                Shortcut::Copy => self.copy(services.clipboard),
                Shortcut::Cut => self.cut_with(services.clipboard, true),
                Shortcut::Paste => self.paste_from(services.clipboard),
                Shortcut::SelectAll => self.select_all(),
            }
            return;
        }

        let Some(motion) = stroke.key.motion() else {
            return;
        };
        let extend = stroke.mods.shift();
        let before = self.buffer.cursor();
        match motion {
            Motion::Left | Motion::Right => {
                let jump = stroke.mods.ctrl() && !self.is_password_mode();
                self.move_cursor(motion == Motion::Right, jump);
            }
            Motion::Home => self.buffer.place_cursor(0),
            Motion::End => self.buffer.place_cursor(self.buffer.len_chars()),
        }
        if !extend {
            self.buffer.clear_selection();
        } else if !self.buffer.has_selection() {
            self.buffer.anchor_selection(before);
        }
        self.buffer.clamp();

        if motion.repeats() {
            self.cancel_key_repeat(services.scheduler);
            let task = TimerTask::KeyRepeat {
                field: self.id(),
                keystroke: stroke,
            };
            self.key_repeat = Some(services.scheduler.schedule(
                self.key_repeat_interval,
                true,
                task,
            ));
        }
    }

    /// A character produced by the keyboard. Backspace, delete, tab and enter
    /// arrive here as their control characters.
    pub fn key_typed(&mut self, key: KeyCode, ch: char, mods: Modifiers) {
        if self.is_disabled() || mods.ctrl() {
            return;
        }

        let editing_key = matches!(
            key,
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Tab | KeyCode::Enter
        );
        if !editing_key && (ch as u32) < 32 {
            return;
        }

        if key == KeyCode::Tab && self.focus_traversal() {
            self.events.push(FieldEvent::FocusTraversal {
                backward: mods.shift(),
            });
            return;
        }

        let enter = key == KeyCode::Enter;
        let backspace = key == KeyCode::Backspace;
        let delete = key == KeyCode::Delete;
        let add = if enter {
            self.constraints.write_enters
        } else {
            !self.constraints.only_font_chars || self.font().has_glyph(ch)
        };
        let remove = backspace || delete;
        if !add && !remove {
            return;
        }

        self.blink.reset();
        let old = self.buffer.as_str().to_string();

        if self.buffer.selected_range().is_some() {
            self.buffer
                .delete_range(self.buffer.selection_start(), self.buffer.cursor());
        } else {
            self.buffer.clear_selection();
            let cursor = self.buffer.cursor();
            if backspace && cursor > 0 {
                self.buffer.delete_range(cursor - 1, cursor);
                self.layout.reset_scroll();
            }
            if delete && cursor < self.buffer.len_chars() {
                self.buffer.delete_range(cursor, cursor + 1);
            }
        }

        if add && !remove {
            if !enter {
                let mut ctx = crate::editable::FilterContext::new(self.buffer.as_str());
                let allowed = self.constraints.is_char_allowed(&mut ctx, ch);
                if let Some(text) = ctx.into_forced_text() {
                    self.set_text_forced(&text);
                    return;
                }
                if !allowed {
                    self.notify_change(old, true);
                    return;
                }
            }

            if !self.buffer.within_max_length(self.buffer.len_chars()) {
                self.notify_change(old, true);
                return;
            }

            let insertion = if enter { '\n' } else { ch };
            let cursor = self.buffer.cursor();
            let mut utf8 = [0u8; 4];
            let inserted = self.buffer.insert_at(cursor, insertion.encode_utf8(&mut utf8));
            self.buffer.place_cursor(cursor + inserted);
        }

        self.notify_change(old, true);
    }

    /// Key released: stops any key repeat
    pub fn key_up(&mut self, _key: KeyCode, scheduler: &mut dyn Scheduler) {
        self.cancel_key_repeat(scheduler);
    }

    fn cancel_key_repeat(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.key_repeat.take() {
            scheduler.cancel(handle);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Keyboard focus arrived. The selection is re-armed at the cursor.
    pub fn gained_focus(&mut self) {
        self.focused = true;
        self.buffer.anchor_selection(self.buffer.cursor());
        self.blink.reset();
    }

    pub fn lost_focus(&mut self, scheduler: &mut dyn Scheduler) {
        self.focused = false;
        self.buffer.clear_selection();
        self.cancel_key_repeat(scheduler);
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn mouse_enter(&mut self) {
        if self.pointer == PointerState::Idle {
            self.pointer = PointerState::Over;
        }
    }

    /// Pointer left the bounds. A drag in progress keeps tracking until the
    /// boundary threshold or the release ends it.
    pub fn mouse_exit(&mut self) {
        if self.pointer == PointerState::Over {
            self.pointer = PointerState::Idle;
        }
    }

    /// Primary button pressed at `local`. Returns false when the field does
    /// not take the press.
    pub fn mouse_pressed(&mut self, local: Point) -> bool {
        if self.is_disabled() {
            return false;
        }

        self.pointer = PointerState::Pressed;
        self.set_cursor_from_x(local.x);
        self.buffer.anchor_selection(self.buffer.cursor());
        self.events.push(FieldEvent::FocusRequested);
        true
    }

    /// Drag while pressed extends the selection. Straying farther than the
    /// boundary threshold abandons the drag.
    pub fn mouse_moved(&mut self, local: Point) {
        if self.pointer != PointerState::Pressed {
            return;
        }

        let bounds = self.bounds();
        let local_bounds = Rect::new(0.0, 0.0, bounds.width, bounds.height);
        if local_bounds.distance_outside(local) > self.boundary_threshold {
            self.pointer = PointerState::Idle;
            self.events.push(FieldEvent::PointerReleased);
            return;
        }

        self.set_cursor_from_x(local.x);
    }

    /// Button released. A click that never moved collapses the selection;
    /// the second rapid click selects the word under the cursor.
    pub fn mouse_up(&mut self, _local: Point) {
        if self.buffer.selection_start() == self.buffer.cursor() {
            self.buffer.clear_selection();
        }

        let clicks = self.clicks.register(self.clock, self.click_interval);
        if clicks == 2 {
            let chars = self.buffer.chars();
            let (start, end) = word_under_cursor(&chars, self.buffer.cursor());
            self.buffer.set_selection(start, end);
        }

        self.pointer = PointerState::Idle;
    }

    fn set_cursor_from_x(&mut self, local_x: f32) {
        self.blink.reset();
        let x = local_x - self.style().padding().left;
        let index = letter_under_cursor(self.layout(), x);
        self.buffer.place_cursor(index);
    }
}
