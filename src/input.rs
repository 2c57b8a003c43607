use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::heading::Heading;

/// Discrete commands delivered to the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Steer(Heading),
    Exit,
}

/// Maps a key press to a game command; unrecognised keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameInput::Exit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Steer(Heading::UP)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Steer(Heading::DOWN)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Steer(Heading::LEFT)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Steer(Heading::RIGHT)),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Exit),
        _ => None,
    }
}

/// Keyboard input source backed by crossterm events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event and maps it.
    ///
    /// Returns `Ok(None)` on timeout and for events that carry no command.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{GameInput, map_key};
    use crate::heading::Heading;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_map_to_headings() {
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(GameInput::Steer(Heading::UP))
        );
        assert_eq!(
            map_key(press(KeyCode::Down)),
            Some(GameInput::Steer(Heading::DOWN))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('A'))),
            Some(GameInput::Steer(Heading::LEFT))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(GameInput::Steer(Heading::RIGHT))
        );
    }

    #[test]
    fn escape_and_ctrl_c_exit() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Exit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Exit)
        );
    }

    #[test]
    fn unknown_keys_and_releases_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
