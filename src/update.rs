//! Update functions for the Elm-style architecture
//!
//! All stage state transformations flow through these functions.

use std::time::Duration;

use crate::commands::Cmd;
use crate::keymap::Keystroke;
use crate::messages::{FocusMsg, KeyMsg, MouseMsg, Msg};
use crate::scheduler::TimerTask;
use crate::stage::Stage;
use crate::view::geometry::Point;

#[cfg(debug_assertions)]
use crate::tracing::FieldSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(stage: &mut Stage, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(stage, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(stage, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(stage: &mut Stage, msg: Msg) -> Option<Cmd> {
    let cmds = match msg {
        Msg::Mouse(m) => update_mouse(stage, m),
        Msg::Keyboard(m) => update_keyboard(stage, m),
        Msg::Focus(m) => update_focus(stage, m),
        Msg::Frame(dt) => update_frame(stage, dt),
    };

    match Cmd::batch(cmds) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

// =============================================================================
// Pointer
// =============================================================================

pub fn update_mouse(stage: &mut Stage, msg: MouseMsg) -> Vec<Cmd> {
    match msg {
        MouseMsg::Moved(p) => {
            let mut cmds = update_hover(stage, p);
            if let Some(id) = stage.pointer_target {
                if let Some(local) = stage.local_point(id, p) {
                    stage.with_field(id, |field, _| field.mouse_moved(local));
                    cmds.push(Cmd::Redraw);
                    cmds.extend(stage.drain_events(id));
                }
            }
            cmds
        }
        MouseMsg::Pressed(p) => {
            let Some((id, _)) = stage.root.field_at(p, Point::default()) else {
                return stage.set_keyboard_focus(None).into_iter().collect();
            };
            let Some(local) = stage.local_point(id, p) else {
                return Vec::new();
            };

            let taken = stage
                .with_field(id, |field, _| field.mouse_pressed(local))
                .unwrap_or(false);
            if !taken {
                return Vec::new();
            }

            stage.pointer_target = Some(id);
            let mut cmds = vec![Cmd::Redraw];
            cmds.extend(stage.drain_events(id));
            cmds
        }
        MouseMsg::Released(p) => {
            let Some(id) = stage.pointer_target.take() else {
                return Vec::new();
            };
            let local = stage.local_point(id, p).unwrap_or(p);
            stage.with_field(id, |field, _| field.mouse_up(local));

            let mut cmds = vec![Cmd::Redraw];
            cmds.extend(stage.drain_events(id));
            cmds.extend(update_hover(stage, p));
            cmds
        }
        MouseMsg::Left => {
            if let Some(id) = stage.hovered.take() {
                stage.with_field(id, |field, _| field.mouse_exit());
            }
            Vec::new()
        }
    }
}

/// Track which field the pointer is over, sending enter/exit
fn update_hover(stage: &mut Stage, p: Point) -> Vec<Cmd> {
    let over = stage.root.field_at(p, Point::default()).map(|(id, _)| id);
    if over == stage.hovered {
        return Vec::new();
    }

    if let Some(old) = stage.hovered {
        stage.with_field(old, |field, _| field.mouse_exit());
    }
    if let Some(new) = over {
        stage.with_field(new, |field, _| field.mouse_enter());
    }
    stage.hovered = over;
    Vec::new()
}

// =============================================================================
// Keyboard
// =============================================================================

pub fn update_keyboard(stage: &mut Stage, msg: KeyMsg) -> Vec<Cmd> {
    if let KeyMsg::ModifiersChanged(mods) = msg {
        stage.modifiers = mods;
        return Vec::new();
    }

    let Some(id) = stage.keyboard_focus else {
        return Vec::new();
    };

    let mods = stage.modifiers;
    let handled = stage.with_field(id, |field, services| match msg {
        KeyMsg::Down(stroke) => field.key_down(stroke, services),
        KeyMsg::Typed { key, ch } => field.key_typed(key, ch, mods),
        KeyMsg::Up(key) => field.key_up(key, services.scheduler),
        KeyMsg::ModifiersChanged(_) => {}
    });
    if handled.is_none() {
        return Vec::new();
    }

    let mut cmds = vec![Cmd::Redraw];
    cmds.extend(stage.drain_events(id));
    cmds
}

// =============================================================================
// Focus
// =============================================================================

pub fn update_focus(stage: &mut Stage, msg: FocusMsg) -> Vec<Cmd> {
    match msg {
        FocusMsg::Set(to) => stage.set_keyboard_focus(to).into_iter().collect(),
        FocusMsg::Next { backward } => match stage.keyboard_focus {
            Some(from) => stage.focus_next_from(from, backward).into_iter().collect(),
            None => Vec::new(),
        },
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Advance the clock, field blink timers and scheduled tasks
pub fn update_frame(stage: &mut Stage, dt: Duration) -> Vec<Cmd> {
    stage.clock += dt;

    let mut blinked = false;
    stage
        .root
        .for_each_field_mut(Point::default(), &mut |field, _| {
            blinked |= field.advance(dt);
        });

    let mut cmds = Vec::new();
    if blinked {
        cmds.push(Cmd::Redraw);
    }

    for task in stage.scheduler.tick(dt) {
        match task {
            TimerTask::KeyRepeat { field, keystroke } => {
                if stage.keyboard_focus != Some(field) {
                    continue;
                }
                let stroke = Keystroke::new(keystroke.key, stage.modifiers);
                stage.with_field(field, |f, services| f.key_down(stroke, services));
                cmds.push(Cmd::Redraw);
                cmds.extend(stage.drain_events(field));
            }
        }
    }

    cmds
}

// =============================================================================
// Tracing
// =============================================================================

/// Traced update wrapper (debug builds only)
///
/// Captures the focused field's state before and after and logs the diff.
/// Frame ticks are not logged.
#[cfg(debug_assertions)]
fn update_traced(stage: &mut Stage, msg: Msg) -> Option<Cmd> {
    let is_noisy = matches!(msg, Msg::Frame(_) | Msg::Mouse(MouseMsg::Moved(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let focus_before = stage.keyboard_focus;
    let before = stage.focused_field().map(FieldSnapshot::from_field);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(stage, msg);

    if stage.keyboard_focus == focus_before {
        if let (Some(before), Some(field)) = (&before, stage.focused_field()) {
            let after = FieldSnapshot::from_field(field);
            if let Some(diff) = before.diff(&after) {
                debug!(target: "cursor", %diff, "state changed");
            }
        }
    }

    stage.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Keyboard::Typed { key: Char('x'), ch: 'x' }`
/// - `Focus::Next { backward: true }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Mouse(m) => format!("Mouse::{:?}", m),
        Msg::Keyboard(m) => format!("Keyboard::{:?}", m),
        Msg::Focus(m) => format!("Focus::{:?}", m),
        Msg::Frame(dt) => format!("Frame({:?})", dt),
    }
}
