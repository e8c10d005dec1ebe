use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::key_codes;

/// High-level input events consumed by the host loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    /// A virtual key code for the game's direction table.
    Key(u32),
    Pause,
    Quit,
}

/// Waits up to `timeout` for one key press and translates it.
///
/// Returns `Ok(None)` on timeout and for events the game does not use.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(translate_key(key)),
        _ => Ok(None),
    }
}

/// Maps a terminal key event onto a game input.
#[must_use]
pub fn translate_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        KeyCode::Char('p' | 'P') => Some(GameInput::Pause),
        code => virtual_key_code(code).map(GameInput::Key),
    }
}

/// Returns the virtual key code of an arrow or WASD key.
#[must_use]
pub fn virtual_key_code(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Left => Some(key_codes::LEFT),
        KeyCode::Up => Some(key_codes::UP),
        KeyCode::Right => Some(key_codes::RIGHT),
        KeyCode::Down => Some(key_codes::DOWN),
        KeyCode::Char(c) => match c.to_ascii_uppercase() {
            'A' => Some(key_codes::A),
            'D' => Some(key_codes::D),
            'S' => Some(key_codes::S),
            'W' => Some(key_codes::W),
            _ => None,
        },
        _ => None,
    }
}
