//! Key mapping from terminal events to engine input.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal key event means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Press(Key),
    Release(Key),
    TogglePause,
    NewGame,
    Quit,
}

/// Map a key code to a game key (arrows, WASD, HJKL).
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Key::Up)
        }
        _ => None,
    }
}

/// Translate a terminal key event.
///
/// Auto-repeat events count as presses so that terminals without release
/// reporting keep a held key alive.
pub fn handle_key_event(event: KeyEvent) -> Option<KeyInput> {
    if should_quit(event) {
        return (event.kind != KeyEventKind::Release).then_some(KeyInput::Quit);
    }

    if let Some(key) = map_key_code(event.code) {
        return Some(match event.kind {
            KeyEventKind::Release => KeyInput::Release(key),
            KeyEventKind::Press | KeyEventKind::Repeat => KeyInput::Press(key),
        });
    }

    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(KeyInput::TogglePause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyInput::NewGame),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
