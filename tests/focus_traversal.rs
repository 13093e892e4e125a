//! Focus traversal tests - tab order across groups, wrap-around, skipping

mod common;

use common::{press_typed, test_field, text, type_text};
use textfield::clipboard::MemoryClipboard;
use textfield::keymap::{KeyCode, Modifiers};
use textfield::messages::{FocusMsg, KeyMsg, Msg};
use textfield::view::Point;
use textfield::{update, Cmd, FieldId, Group, Stage};

/// Login-style form: two fields on a row, a nested group below with two more
fn form() -> (Stage, [FieldId; 4]) {
    let user = test_field("user").at(0.0, 0.0);
    let host = test_field("host").at(200.0, 0.0);
    let pass = test_field("pass").at(0.0, 0.0);
    let port = test_field("port").at(200.0, 0.0);
    let ids = [user.id(), host.id(), pass.id(), port.id()];

    let root = Group::default()
        .with(Group::new(Point::new(0.0, 60.0)).with(port).with(pass))
        .with(host)
        .with(user);
    let mut stage = Stage::new(root, Box::new(MemoryClipboard::new()));
    update(&mut stage, Msg::Focus(FocusMsg::Set(Some(ids[0]))));
    (stage, ids)
}

fn tab(stage: &mut Stage, backward: bool) -> Option<Cmd> {
    let mods = if backward {
        Modifiers::SHIFT
    } else {
        Modifiers::NONE
    };
    update(stage, Msg::Keyboard(KeyMsg::ModifiersChanged(mods)));
    let cmd = Msg::typed_key(KeyCode::Tab).and_then(|msg| update(stage, msg));
    update(stage, Msg::Keyboard(KeyMsg::ModifiersChanged(Modifiers::NONE)));
    cmd
}

#[test]
fn test_tab_moves_in_reading_order() {
    let (mut stage, [user, host, pass, port]) = form();
    assert_eq!(stage.keyboard_focus(), Some(user));
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(host));
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(pass));
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(port));
}

#[test]
fn test_tab_wraps_around() {
    let (mut stage, [user, _, _, port]) = form();
    update(&mut stage, Msg::Focus(FocusMsg::Set(Some(port))));
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(user));
}

#[test]
fn test_shift_tab_goes_backward_and_wraps() {
    let (mut stage, [user, _, _, port]) = form();
    tab(&mut stage, true);
    assert_eq!(stage.keyboard_focus(), Some(port));
    tab(&mut stage, true);
    tab(&mut stage, true);
    tab(&mut stage, true);
    assert_eq!(stage.keyboard_focus(), Some(user));
}

#[test]
fn test_tab_selects_target_text() {
    let (mut stage, [user, host, _, _]) = form();
    let cmd = tab(&mut stage, false).expect("traversal produces commands");
    assert!(matches!(
        cmd,
        Cmd::Batch(ref cmds) if cmds.contains(&Cmd::FocusChanged { from: Some(user), to: Some(host) })
    ));

    let field = stage.field(host).expect("field exists");
    assert_eq!(field.selection_text(), "host");
    assert!(stage.field(user).is_some_and(|f| !f.is_focused()));

    type_text(&mut stage, "db");
    assert_eq!(text(&stage, host), "db");
}

#[test]
fn test_tab_skips_disabled() {
    let (mut stage, [user, host, pass, _]) = form();
    if let Some(f) = stage.field_mut(host) {
        f.set_disabled(true);
    }
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(pass));
    tab(&mut stage, true);
    assert_eq!(stage.keyboard_focus(), Some(user));
}

#[test]
fn test_traversal_disabled_does_not_type_tab() {
    let (mut stage, [user, _, _, _]) = form();
    if let Some(f) = stage.field_mut(user) {
        f.set_focus_traversal(false);
        f.set_cursor_position(4);
    }
    press_typed(&mut stage, KeyCode::Tab);
    assert_eq!(stage.keyboard_focus(), Some(user));
    assert_eq!(text(&stage, user), "user");
}

#[test]
fn test_focus_next_message() {
    let (mut stage, [_, host, _, _]) = form();
    update(&mut stage, Msg::Focus(FocusMsg::Next { backward: false }));
    assert_eq!(stage.keyboard_focus(), Some(host));
}

#[test]
fn test_lone_field_keeps_focus() {
    let field = test_field("solo");
    let id = field.id();
    let mut stage = Stage::new(
        Group::default().with(field),
        Box::new(MemoryClipboard::new()),
    );
    update(&mut stage, Msg::Focus(FocusMsg::Set(Some(id))));
    tab(&mut stage, false);
    assert_eq!(stage.keyboard_focus(), Some(id));
}
