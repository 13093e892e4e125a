//! Translation from winit keyboard events

use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::types::{KeyCode, Keystroke, Modifiers};

pub fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::NONE
        .with_if(Modifiers::CTRL, state.control_key())
        .with_if(Modifiers::SHIFT, state.shift_key())
        .with_if(Modifiers::ALT, state.alt_key())
        .with_if(Modifiers::META, state.super_key())
}

fn named_key(named: &NamedKey) -> Option<KeyCode> {
    let key = match named {
        NamedKey::ArrowLeft => KeyCode::Left,
        NamedKey::ArrowRight => KeyCode::Right,
        NamedKey::ArrowUp => KeyCode::Up,
        NamedKey::ArrowDown => KeyCode::Down,
        NamedKey::Home => KeyCode::Home,
        NamedKey::End => KeyCode::End,
        NamedKey::Insert => KeyCode::Insert,
        NamedKey::Delete => KeyCode::Delete,
        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Enter => KeyCode::Enter,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Space => KeyCode::Space,
        _ => return None,
    };
    Some(key)
}

/// The field-level key for a winit logical key. Function, media and other
/// keys a text field has no use for map to `None`.
pub fn key_code_from_winit(logical_key: &Key) -> Option<KeyCode> {
    match logical_key {
        Key::Named(named) => named_key(named),
        Key::Character(s) => s
            .chars()
            .next()
            .map(|c| KeyCode::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}

pub fn keystroke_from_winit(logical_key: &Key, modifiers: ModifiersState) -> Option<Keystroke> {
    key_code_from_winit(logical_key).map(|key| Keystroke::new(key, modifiers_from_winit(modifiers)))
}

/// The character a key press types, if any.
///
/// Editing keys produce their control character so the field sees the same
/// stream a character callback would deliver; otherwise the first character
/// of the event text is used.
pub fn typed_char_from_winit(logical_key: &Key, text: Option<&str>) -> Option<char> {
    key_code_from_winit(logical_key)
        .and_then(KeyCode::control_char)
        .or_else(|| text?.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_v_maps_to_paste_stroke() {
        let stroke = keystroke_from_winit(&Key::Character("V".into()), ModifiersState::CONTROL)
            .expect("character keys map");
        assert_eq!(stroke, Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL));
    }

    #[test]
    fn test_shift_alt_arrow() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::ArrowLeft),
            ModifiersState::SHIFT | ModifiersState::ALT,
        )
        .expect("arrows map");
        assert_eq!(stroke.key, KeyCode::Left);
        assert_eq!(stroke.mods, Modifiers::SHIFT | Modifiers::ALT);
    }

    #[test]
    fn test_super_is_meta() {
        assert_eq!(
            modifiers_from_winit(ModifiersState::SUPER),
            Modifiers::META
        );
    }

    #[test]
    fn test_function_keys_ignored() {
        assert!(keystroke_from_winit(&Key::Named(NamedKey::F5), ModifiersState::empty()).is_none());
        assert!(key_code_from_winit(&Key::Character("".into())).is_none());
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(
            typed_char_from_winit(&Key::Character("Q".into()), Some("Q")),
            Some('Q')
        );
        assert_eq!(
            typed_char_from_winit(&Key::Named(NamedKey::Backspace), None),
            Some('\u{8}')
        );
        assert_eq!(
            typed_char_from_winit(&Key::Named(NamedKey::Enter), Some("\r")),
            Some('\r')
        );
        assert_eq!(
            typed_char_from_winit(&Key::Named(NamedKey::ArrowLeft), None),
            None
        );
    }
}
