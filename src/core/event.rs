use crate::ui::core::geom::Pos;

/// Discrete input produced by the frontend once per poll.
///
/// The core never reads raw device state; it only consumes this sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerMove(Pos),
    PointerDown(Pos),
    /// Committed text (one or more printable characters).
    TextInput(String),
    KeyDown(KeyCode),
    Resize(u16, u16),
}

impl InputEvent {
    pub fn pointer(&self) -> Option<Pos> {
        match self {
            InputEvent::PointerMove(pos) | InputEvent::PointerDown(pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Esc,
    Tab,
    Unknown,
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
