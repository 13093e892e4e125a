//! Command types for the Elm-style architecture
//!
//! Commands are what `update` hands back to the host: redraw requests and
//! notifications the host may want to forward to application code.

use crate::field::FieldId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw
    Redraw,
    /// A field's text changed through user input (or a notifying
    /// programmatic edit)
    TextChanged {
        field: FieldId,
        old: String,
        new: String,
    },
    /// Keyboard focus moved
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch, collapsing trivial cases
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|c| *c != Cmd::None);
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::TextChanged { .. } => true,
            Cmd::FocusChanged { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten into the list of text-change notifications it carries
    pub fn text_changes(&self) -> Vec<(FieldId, &str, &str)> {
        match self {
            Cmd::TextChanged { field, old, new } => vec![(*field, old.as_str(), new.as_str())],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.text_changes()).collect(),
            _ => Vec::new(),
        }
    }
}
