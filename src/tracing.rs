//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging cursor,
//! selection and focus transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,focus=debug` - scoped filtering
//! - `RUST_LOG=textfield::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! [`init`] writes debug-level logs to `<config>/textfield/logs/textfield.log`
//! with daily rotation. Hosts with their own log location use [`try_init`].

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::field::TextField;

const LOG_FILE: &str = "textfield.log";

/// Install the global subscriber: RUST_LOG-filtered console output (default
/// `warn`) plus a debug-level log file in `log_dir` when one is given.
///
/// Fails when a global subscriber is already installed, e.g. by the host
/// application.
pub fn try_init(log_dir: Option<&Path>) -> Result<(), String> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = log_dir.map(|dir| {
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

/// [`try_init`] with the log file in the user's config directory. Problems
/// are reported on stderr and never abort the host.
pub fn init() {
    let logs = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };
    if let Err(e) = try_init(logs.as_deref()) {
        eprintln!("Warning: {}", e);
    }
}

/// Lightweight snapshot of a field's cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub cursor: usize,
    pub anchor: usize,
    pub has_selection: bool,
    pub text_len: usize,
    pub focused: bool,
}

impl FieldSnapshot {
    pub fn from_field(field: &TextField) -> Self {
        Self {
            cursor: field.cursor_position(),
            anchor: field.selection_start(),
            has_selection: field.has_selection(),
            text_len: field.text().chars().count(),
            focused: field.is_focused(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.has_selection != other.has_selection {
            let status = if other.has_selection {
                "active"
            } else {
                "cleared"
            };
            changes.push(format!("selection {}", status));
        } else if other.has_selection && self.anchor != other.anchor {
            changes.push(format!("anchor: {} → {}", self.anchor, other.anchor));
        }
        if self.text_len != other.text_len {
            changes.push(format!("length: {} → {}", self.text_len, other.text_len));
        }
        if self.focused != other.focused {
            changes.push(format!("focused: {}", other.focused));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
