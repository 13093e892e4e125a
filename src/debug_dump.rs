//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of every field on a stage to JSON.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::field::{FieldId, PointerState, TextField};
use crate::stage::Stage;
use crate::view::geometry::Point;

#[derive(Serialize)]
pub struct StageDump {
    pub timestamp: u64,
    pub clock_ms: u128,
    pub keyboard_focus: Option<FieldId>,
    pub hovered: Option<FieldId>,
    pub pending_timers: usize,
    pub fields: Vec<FieldDump>,
}

#[derive(Serialize)]
pub struct FieldDump {
    pub id: FieldId,
    pub stage_x: f32,
    pub stage_y: f32,
    pub width: f32,
    pub height: f32,
    pub text_len: usize,
    pub cursor: usize,
    pub selection: Option<SelectionDump>,
    pub focused: bool,
    pub disabled: bool,
    pub password_mode: bool,
    pub pointer: PointerState,
    pub layout: LayoutDump,
}

#[derive(Serialize)]
pub struct SelectionDump {
    pub anchor: usize,
    pub head: usize,
    pub is_empty: bool,
    pub backward: bool,
}

#[derive(Serialize)]
pub struct LayoutDump {
    pub visible_start: usize,
    pub visible_end: usize,
    pub render_offset: f32,
    pub text_offset: f32,
    pub text_width: f32,
}

impl StageDump {
    /// Snapshot the stage. Field layouts are brought up to date first.
    pub fn from_stage(stage: &mut Stage) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut fields = Vec::new();
        stage
            .root
            .for_each_field_mut(Point::default(), &mut |field, parent| {
                fields.push(FieldDump::from_field(field, parent));
            });

        Self {
            timestamp,
            clock_ms: stage.clock().as_millis(),
            keyboard_focus: stage.keyboard_focus(),
            hovered: stage.hovered(),
            pending_timers: stage.scheduler().pending(),
            fields,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump into `dir` and return the file path
    pub fn save_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("textfield-state-{}.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        tracing::info!(path = %path.display(), "state dump written");
        Ok(path)
    }
}

impl FieldDump {
    fn from_field(field: &mut TextField, parent: Point) -> Self {
        let bounds = field.bounds().translated(parent);
        let selection = field.selection().map(|sel| SelectionDump {
            anchor: sel.anchor,
            head: sel.head,
            is_empty: sel.is_empty(),
            backward: sel.is_backward(),
        });

        let layout = field.layout();
        let layout = LayoutDump {
            visible_start: layout.visible_start(),
            visible_end: layout.visible_end(),
            render_offset: layout.render_offset(),
            text_offset: layout.text_offset(),
            text_width: layout.text_width(),
        };

        Self {
            id: field.id(),
            stage_x: bounds.x,
            stage_y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            text_len: field.text().chars().count(),
            cursor: field.cursor_position(),
            selection,
            focused: field.is_focused(),
            disabled: field.is_disabled(),
            password_mode: field.is_password_mode(),
            pointer: field.pointer_state(),
            layout,
        }
    }
}

/// JSON snapshot of every field on the stage
pub fn dump_stage(stage: &mut Stage) -> String {
    StageDump::from_stage(stage).to_json()
}
