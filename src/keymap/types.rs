//! Keystrokes and what they mean to a text field

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Held modifier keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, the Windows key elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    const LABELS: [(Modifiers, &'static str); 4] = [
        (Self::CTRL, "Ctrl"),
        (Self::SHIFT, "Shift"),
        (Self::ALT, "Alt"),
        (Self::META, "Meta"),
    ];

    /// `self` plus `other` when `on` is set
    #[must_use]
    pub const fn with_if(self, other: Modifiers, on: bool) -> Self {
        if on {
            Modifiers(self.0 | other.0)
        } else {
            self
        }
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut held = Self::LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label);
        if let Some(first) = held.next() {
            f.write_str(first)?;
        }
        for label in held {
            write!(f, "+{}", label)?;
        }
        Ok(())
    }
}

/// Keys a text field reacts to. Everything else arrives as `Char` or is
/// dropped by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    Insert,
}

/// Cursor movement bound to a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Home,
    End,
}

impl Motion {
    /// Held arrows step again on every key-repeat tick
    pub fn repeats(self) -> bool {
        matches!(self, Motion::Left | Motion::Right)
    }
}

/// Clipboard and selection shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Copy,
    Cut,
    Paste,
    SelectAll,
}

impl KeyCode {
    pub fn motion(self) -> Option<Motion> {
        Some(match self {
            KeyCode::Left => Motion::Left,
            KeyCode::Right => Motion::Right,
            KeyCode::Home => Motion::Home,
            KeyCode::End => Motion::End,
            _ => return None,
        })
    }

    /// The control character a key produces when typed, if any
    pub fn control_char(self) -> Option<char> {
        match self {
            KeyCode::Backspace => Some('\u{8}'),
            KeyCode::Tab => Some('\t'),
            KeyCode::Enter => Some('\r'),
            KeyCode::Delete => Some('\u{7f}'),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Char(c) => return write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "Backspace",
            KeyCode::Delete => "Delete",
            KeyCode::Space => "Space",
            KeyCode::Up => "↑",
            KeyCode::Down => "↓",
            KeyCode::Left => "←",
            KeyCode::Right => "→",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::Insert => "Insert",
        };
        f.write_str(name)
    }
}

/// A key press together with the modifiers held at the time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Character key with modifiers, normalized the way the adapter does
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Clipboard shortcut this stroke triggers. Ctrl bindings win over the
    /// shift+Insert / shift+Delete pair.
    pub fn shortcut(&self) -> Option<Shortcut> {
        if self.mods.ctrl() {
            let found = match self.key {
                KeyCode::Char('c') | KeyCode::Insert => Some(Shortcut::Copy),
                KeyCode::Char('x') => Some(Shortcut::Cut),
                KeyCode::Char('v') => Some(Shortcut::Paste),
                KeyCode::Char('a') => Some(Shortcut::SelectAll),
                _ => None,
            };
            if found.is_some() {
                return found;
            }
        }
        match self.key {
            KeyCode::Insert if self.mods.shift() => Some(Shortcut::Paste),
            KeyCode::Delete if self.mods.shift() => Some(Shortcut::Cut),
            _ => None,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_display_order() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert_eq!(mods.to_string(), "Ctrl+Shift");
        assert_eq!(Modifiers::NONE.to_string(), "");

        let mut held = Modifiers::NONE.with_if(Modifiers::ALT, true);
        held |= Modifiers::META;
        assert!(held.alt() && !held.ctrl());
        assert_eq!(held.to_string(), "Alt+Meta");
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::char_with_mods('C', Modifiers::CTRL);
        assert_eq!(stroke.key, KeyCode::Char('c'));
        assert_eq!(stroke.to_string(), "Ctrl+C");
        assert_eq!(Keystroke::key(KeyCode::Left).to_string(), "←");
    }

    #[test]
    fn test_shortcuts() {
        let ctrl = |c| Keystroke::char_with_mods(c, Modifiers::CTRL);
        assert_eq!(ctrl('v').shortcut(), Some(Shortcut::Paste));
        assert_eq!(ctrl('A').shortcut(), Some(Shortcut::SelectAll));
        assert_eq!(ctrl('z').shortcut(), None);

        let shift = |k| Keystroke::new(k, Modifiers::SHIFT);
        assert_eq!(shift(KeyCode::Insert).shortcut(), Some(Shortcut::Paste));
        assert_eq!(shift(KeyCode::Delete).shortcut(), Some(Shortcut::Cut));
        assert_eq!(
            Keystroke::new(KeyCode::Insert, Modifiers::CTRL | Modifiers::SHIFT).shortcut(),
            Some(Shortcut::Copy)
        );
        assert_eq!(Keystroke::key(KeyCode::Delete).shortcut(), None);
    }

    #[test]
    fn test_motions() {
        assert_eq!(KeyCode::Home.motion(), Some(Motion::Home));
        assert!(!Motion::Home.repeats());
        assert!(Motion::Left.repeats());
        assert_eq!(KeyCode::Delete.motion(), None);
    }

    #[test]
    fn test_control_chars() {
        assert_eq!(KeyCode::Backspace.control_char(), Some('\u{8}'));
        assert_eq!(KeyCode::Char('a').control_char(), None);
    }
}
