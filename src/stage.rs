//! The stage: owns the widget tree and the host services fields use
//!
//! The stage tracks keyboard focus, the field currently receiving a drag,
//! and hover. Message routing lives in [`crate::update`]; this module holds
//! the state and the helpers routing is built from.

use std::time::Duration;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::commands::Cmd;
use crate::field::{FieldId, Services, TextField};
use crate::focus::{next_field, Group, Widget};
use crate::keymap::Modifiers;
use crate::messages::FieldEvent;
use crate::scheduler::FrameScheduler;
use crate::view::geometry::Point;
use crate::view::text_field::RenderSink;

pub struct Stage {
    pub(crate) root: Group,
    pub(crate) keyboard_focus: Option<FieldId>,
    /// Field that took the last press and receives drags until release
    pub(crate) pointer_target: Option<FieldId>,
    pub(crate) hovered: Option<FieldId>,
    pub(crate) modifiers: Modifiers,
    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) scheduler: FrameScheduler,
    pub(crate) clock: Duration,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("root", &self.root)
            .field("keyboard_focus", &self.keyboard_focus)
            .field("pointer_target", &self.pointer_target)
            .field("hovered", &self.hovered)
            .field("modifiers", &self.modifiers)
            .field("timers", &self.scheduler.pending())
            .field("clock", &self.clock)
            .finish()
    }
}

impl Stage {
    pub fn new(root: Group, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            root,
            keyboard_focus: None,
            pointer_target: None,
            hovered: None,
            modifiers: Modifiers::NONE,
            clipboard,
            scheduler: FrameScheduler::new(),
            clock: Duration::ZERO,
        }
    }

    /// Stage backed by the system clipboard
    pub fn with_system_clipboard(root: Group) -> Self {
        Self::new(root, Box::new(SystemClipboard::new()))
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn add(&mut self, widget: impl Into<Widget>) {
        self.root.push(widget);
    }

    pub fn field(&self, id: FieldId) -> Option<&TextField> {
        self.root.find_field(id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        self.root.find_field_mut(id)
    }

    pub fn keyboard_focus(&self) -> Option<FieldId> {
        self.keyboard_focus
    }

    pub fn focused_field(&self) -> Option<&TextField> {
        self.keyboard_focus.and_then(|id| self.root.find_field(id))
    }

    pub fn hovered(&self) -> Option<FieldId> {
        self.hovered
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn clipboard_mut(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Time accumulated from frame messages
    pub fn clock(&self) -> Duration {
        self.clock
    }

    // === Focus ===

    /// Move keyboard focus, notifying both fields. No-op if unchanged.
    pub fn set_keyboard_focus(&mut self, to: Option<FieldId>) -> Option<Cmd> {
        let from = self.keyboard_focus;
        if from == to {
            return None;
        }
        if let Some(id) = to {
            self.root.find_field(id)?;
        }

        if let Some(field) = from.and_then(|id| self.root.find_field_mut(id)) {
            field.lost_focus(&mut self.scheduler);
        }
        if let Some(field) = to.and_then(|id| self.root.find_field_mut(id)) {
            field.gained_focus();
        }
        self.keyboard_focus = to;

        tracing::debug!(target: "focus", ?from, ?to, "keyboard focus changed");
        Some(Cmd::FocusChanged { from, to })
    }

    /// Traverse from `from` to the next eligible field and select its text
    pub fn focus_next_from(&mut self, from: FieldId, backward: bool) -> Option<Cmd> {
        let target = next_field(&self.root, from, backward)?;
        let cmd = self.set_keyboard_focus(Some(target));
        if let Some(field) = self.root.find_field_mut(target) {
            field.select_all();
        }
        Some(cmd.unwrap_or(Cmd::Redraw))
    }

    // === Routing helpers ===

    /// Run `f` against a field with the stage's services
    pub(crate) fn with_field<R>(
        &mut self,
        id: FieldId,
        f: impl FnOnce(&mut TextField, &mut Services<'_>) -> R,
    ) -> Option<R> {
        let Stage {
            root,
            clipboard,
            scheduler,
            ..
        } = self;
        let field = root.find_field_mut(id)?;
        let mut services = Services {
            clipboard: clipboard.as_mut(),
            scheduler,
        };
        Some(f(field, &mut services))
    }

    /// Convert a stage point into `id`'s local coordinates
    pub(crate) fn local_point(&self, id: FieldId, p: Point) -> Option<Point> {
        let parent = self.root.parent_origin_of(id, Point::default())?;
        let field = self.root.find_field(id)?;
        Some(p.relative_to(parent).relative_to(field.bounds().origin()))
    }

    /// Drain a field's outbox, resolving focus requests and traversal
    pub(crate) fn drain_events(&mut self, id: FieldId) -> Vec<Cmd> {
        let events = match self.root.find_field_mut(id) {
            Some(field) => field.take_events(),
            None => return Vec::new(),
        };

        let mut cmds = Vec::with_capacity(events.len());
        for event in events {
            match event {
                FieldEvent::TextChanged { old, new } => {
                    cmds.push(Cmd::TextChanged { field: id, old, new });
                }
                FieldEvent::FocusRequested => {
                    cmds.extend(self.set_keyboard_focus(Some(id)));
                }
                FieldEvent::PointerReleased => {
                    if self.pointer_target == Some(id) {
                        self.pointer_target = None;
                    }
                }
                FieldEvent::FocusTraversal { backward } => {
                    cmds.extend(self.focus_next_from(id, backward));
                }
            }
        }
        cmds
    }

    // === Rendering ===

    /// Emit one frame per field, in tree order
    pub fn render(&mut self, sink: &mut dyn RenderSink) {
        self.root
            .for_each_field_mut(Point::default(), &mut |field, parent| {
                sink.draw_field(&field.frame(parent));
            });
    }

    /// Check invariants on every field (debug builds only)
    pub fn assert_invariants(&self) {
        self.root
            .for_each_field(Point::default(), &mut |field, _| field.assert_invariants());
        if let Some(id) = self.keyboard_focus {
            debug_assert!(
                self.root.find_field(id).is_some_and(|f| f.is_focused()),
                "keyboard focus {:?} must point at a focused field",
                id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::glyphs::MonospaceMetrics;
    use crate::style::TextFieldStyle;

    fn stage_with_two() -> (Stage, FieldId, FieldId) {
        let font = Rc::new(MonospaceMetrics::new(10.0, 20.0));
        let a = TextField::new("alpha", TextFieldStyle::default_dark(), font.clone());
        let b = TextField::new("beta", TextFieldStyle::default_dark(), font).at(0.0, 40.0);
        let (ia, ib) = (a.id(), b.id());
        let root = Group::default().with(a).with(b);
        (Stage::new(root, Box::new(MemoryClipboard::new())), ia, ib)
    }

    #[test]
    fn test_set_keyboard_focus_notifies_fields() {
        let (mut stage, a, b) = stage_with_two();
        assert_eq!(
            stage.set_keyboard_focus(Some(a)),
            Some(Cmd::FocusChanged { from: None, to: Some(a) })
        );
        assert!(stage.field(a).is_some_and(|f| f.is_focused()));
        assert_eq!(stage.set_keyboard_focus(Some(a)), None);

        stage.set_keyboard_focus(Some(b));
        assert!(stage.field(a).is_some_and(|f| !f.is_focused()));
        assert!(stage.field(b).is_some_and(|f| f.is_focused()));
    }

    #[test]
    fn test_focus_unknown_field_ignored() {
        let (mut stage, a, _) = stage_with_two();
        stage.set_keyboard_focus(Some(a));
        let stray = FieldId::next();
        assert_eq!(stage.set_keyboard_focus(Some(stray)), None);
        assert_eq!(stage.keyboard_focus(), Some(a));
    }

    #[test]
    fn test_focus_next_selects_all() {
        let (mut stage, a, b) = stage_with_two();
        stage.set_keyboard_focus(Some(a));
        stage.focus_next_from(a, false);
        assert_eq!(stage.keyboard_focus(), Some(b));
        assert_eq!(stage.field(b).map(|f| f.selection_text()).as_deref(), Some("beta"));
    }

    #[test]
    fn test_local_point() {
        let (stage, _, b) = stage_with_two();
        assert_eq!(
            stage.local_point(b, Point::new(15.0, 45.0)),
            Some(Point::new(15.0, 5.0))
        );
    }

    #[test]
    fn test_render_emits_frame_per_field() {
        let (mut stage, _, _) = stage_with_two();
        let mut sink = crate::view::RecordingSink::default();
        stage.render(&mut sink);
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[1].bounds.y, 40.0);
    }
}
