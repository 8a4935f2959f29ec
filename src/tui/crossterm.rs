use crate::core::event::{InputEvent, KeyCode};
use crate::ui::core::geom::Pos;
use crossterm::event::{
    Event, KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

/// Converts one crossterm event; `None` for events the dashboard has no use
/// for (key releases, scrolling, focus changes, ...).
pub fn into_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => into_key_input(key),
        Event::Mouse(mouse) => into_pointer_input(mouse),
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        Event::Paste(text) => {
            let text: String = text.chars().filter(|c| !c.is_control()).collect();
            (!text.is_empty()).then_some(InputEvent::TextInput(text))
        }
        Event::FocusGained | Event::FocusLost => None,
    }
}

fn into_key_input(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        CtKeyCode::Char('c') | CtKeyCode::Char('q') if ctrl => Some(InputEvent::Quit),
        CtKeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        CtKeyCode::Char(ch) => Some(InputEvent::TextInput(ch.to_string())),
        other => Some(InputEvent::KeyDown(into_key_code(other))),
    }
}

fn into_key_code(code: CtKeyCode) -> KeyCode {
    match code {
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Esc,
        CtKeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Unknown,
    }
}

fn into_pointer_input(mouse: MouseEvent) -> Option<InputEvent> {
    let pos = Pos::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMove(pos)),
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown(pos)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
