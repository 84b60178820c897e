//! Key mapping from terminal events to logical keys.

use crate::types::LogicalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a logical key.
///
/// Only press events map to a key; release and auto-repeat events map to
/// nothing. The bindings are fixed.
pub fn handle_key_event(key: KeyEvent) -> Option<LogicalKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(LogicalKey::Quit);
    }

    match key.code {
        KeyCode::Left => Some(LogicalKey::MoveLeft),
        KeyCode::Right => Some(LogicalKey::MoveRight),
        KeyCode::Down => Some(LogicalKey::SoftDrop),
        KeyCode::Up => Some(LogicalKey::Rotate),

        KeyCode::Char(' ') => Some(LogicalKey::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LogicalKey::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(LogicalKey::Pause),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(LogicalKey::ToggleGhost),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LogicalKey::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
