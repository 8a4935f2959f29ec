use super::*;
use crossterm::event::KeyEventState;

fn key(code: CtKeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn printable_chars_become_text_input() {
    assert_eq!(
        into_input_event(key(CtKeyCode::Char('M'), KeyModifiers::SHIFT)),
        Some(InputEvent::TextInput("M".to_string()))
    );
}

#[test]
fn ctrl_c_and_ctrl_q_quit() {
    assert_eq!(
        into_input_event(key(CtKeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(InputEvent::Quit)
    );
    assert_eq!(
        into_input_event(key(CtKeyCode::Char('q'), KeyModifiers::CONTROL)),
        Some(InputEvent::Quit)
    );
    assert_eq!(
        into_input_event(key(CtKeyCode::Char('x'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn editing_keys_map_to_key_down() {
    assert_eq!(
        into_input_event(key(CtKeyCode::Backspace, KeyModifiers::NONE)),
        Some(InputEvent::KeyDown(KeyCode::Backspace))
    );
    assert_eq!(
        into_input_event(key(CtKeyCode::Enter, KeyModifiers::NONE)),
        Some(InputEvent::KeyDown(KeyCode::Enter))
    );
    assert_eq!(
        into_input_event(key(CtKeyCode::F(5), KeyModifiers::NONE)),
        Some(InputEvent::KeyDown(KeyCode::Unknown))
    );
}

#[test]
fn key_release_is_dropped() {
    let release = KeyEvent {
        code: CtKeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(into_input_event(Event::Key(release)), None);
}

#[test]
fn mouse_moves_and_left_clicks_become_pointer_events() {
    assert_eq!(
        into_input_event(mouse(MouseEventKind::Moved, 3, 4)),
        Some(InputEvent::PointerMove(Pos::new(3, 4)))
    );
    assert_eq!(
        into_input_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
        Some(InputEvent::PointerMove(Pos::new(5, 6)))
    );
    assert_eq!(
        into_input_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 8)),
        Some(InputEvent::PointerDown(Pos::new(7, 8)))
    );
    assert_eq!(
        into_input_event(mouse(MouseEventKind::Down(MouseButton::Right), 7, 8)),
        None
    );
    assert_eq!(into_input_event(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
}

#[test]
fn paste_strips_control_characters() {
    assert_eq!(
        into_input_event(Event::Paste("BRK.B\n".to_string())),
        Some(InputEvent::TextInput("BRK.B".to_string()))
    );
    assert_eq!(into_input_event(Event::Paste("\n".to_string())), None);
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(Event::Resize(120, 40)),
        Some(InputEvent::Resize(120, 40))
    );
}
