//! Keyboard mapping for the game shell.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key press means to the driver. The simulation only ever sees
/// [`GameInput::Flap`]; the rest drive the screen state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap (Space, Up, or Enter).
    Flap,
    /// Quit the program (Esc or 'q').
    Quit,
    /// Anything else.
    Other,
}

/// Map a key event to a [`GameInput`]. Release/repeat events are ignored so
/// holding a key doesn't hover the bird.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Flap,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}
