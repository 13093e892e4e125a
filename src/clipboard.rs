//! Clipboard access
//!
//! The clipboard is a single process-wide slot. Fields only talk to it through
//! [`Clipboard`] so tests can swap in [`MemoryClipboard`].

/// Single-slot text clipboard. Access never fails from the caller's view.
pub trait Clipboard {
    /// Current contents, `None` when empty or not text
    fn contents(&mut self) -> Option<String>;

    /// Replace the contents (last writer wins)
    fn set_contents(&mut self, text: String);
}

/// In-memory clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    slot: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            slot: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn contents(&mut self) -> Option<String> {
        self.slot.clone()
    }

    fn set_contents(&mut self, text: String) {
        self.slot = Some(text);
    }
}

/// The operating system clipboard via `arboard`.
///
/// When no system clipboard is reachable (headless session, no display
/// server) or a write to it fails, the contents live in a process-local slot
/// until the next successful system write.
pub struct SystemClipboard {
    system: Option<arboard::Clipboard>,
    fallback: MemoryClipboard,
    in_fallback: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let system = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!(target: "clipboard", "System clipboard unavailable: {}", e);
                None
            }
        };
        Self {
            system,
            fallback: MemoryClipboard::new(),
            in_fallback: false,
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("system", &self.system.is_some())
            .field("in_fallback", &self.in_fallback)
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn contents(&mut self) -> Option<String> {
        if self.in_fallback {
            return self.fallback.contents();
        }
        match self.system.as_mut() {
            Some(clipboard) => match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!(target: "clipboard", "No text on clipboard: {}", e);
                    None
                }
            },
            None => self.fallback.contents(),
        }
    }

    fn set_contents(&mut self, text: String) {
        if let Some(clipboard) = self.system.as_mut() {
            match clipboard.set_text(text.as_str()) {
                Ok(()) => {
                    self.in_fallback = false;
                    return;
                }
                Err(e) => {
                    tracing::warn!(target: "clipboard", "Failed to write clipboard: {}", e);
                }
            }
        }
        self.fallback.set_contents(text);
        self.in_fallback = true;
    }
}
