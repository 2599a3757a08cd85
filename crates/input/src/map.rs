//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to a logical key; anything unbound maps to `None`.
///
/// Letters follow the keysym bindings (`space`, `w`, `a`, `s`, `d`); arrows are
/// accepted as aliases.
pub fn handle_key_event(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char(' ') => Some(Key::ToggleDrop),
        KeyCode::Up | KeyCode::Char('w') => Some(Key::Rotate),
        KeyCode::Left | KeyCode::Char('a') => Some(Key::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Some(Key::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
