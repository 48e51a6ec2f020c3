//! Session input events and their translation from crossterm.
//!
//! The widgets and the router only ever see `TuiEvent`; the raw crossterm
//! event stream is translated here and nowhere else.

use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// Input events the session loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A printable character was typed.
    Input(char),
    /// Backspace: delete the character before the cursor.
    Backspace,
    /// An arrow key.
    Arrow(Direction),
    /// Escape: drop focus from the current widget.
    Escape,
    /// Enter: finish the session and assemble the commit message.
    Finish,
    /// Ctrl+C: abandon the session immediately.
    Interrupt,
    /// A left or right mouse button press at screen coordinates.
    Click(u16, u16),
    /// The terminal was resized.
    Resize,
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit (column, row) delta for cursor movement.
    pub const fn delta(self) -> (i32, i32) {
        const DELTAS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        DELTAS[self as usize]
    }
}

/// Translate a raw crossterm event. Returns `None` for events the session
/// does not react to (key releases, mouse movement, paste, ...).
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key.code,
                key.modifiers
            );
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Interrupt),
                (_, KeyCode::Char(c)) => Some(TuiEvent::Input(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Finish),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::Arrow(Direction::Up)),
                (_, KeyCode::Down) => Some(TuiEvent::Arrow(Direction::Down)),
                (_, KeyCode::Left) => Some(TuiEvent::Arrow(Direction::Left)),
                (_, KeyCode::Right) => Some(TuiEvent::Arrow(Direction::Right)),
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left | MouseButton::Right) => {
                Some(TuiEvent::Click(mouse.column, mouse.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
