use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Action;

/// Source of player actions. The main loop only sees [`Action`]s, so tests
/// and future frontends can drive a game without a real keyboard.
pub trait InputSource {
    /// Return the next action, or [`Action::None`] if nothing relevant
    /// happened within the polling window.
    fn next_action(&mut self) -> io::Result<Action>;
}

/// Reads crossterm key events from the terminal.
pub struct KeyboardSource;

impl InputSource for KeyboardSource {
    fn next_action(&mut self) -> io::Result<Action> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                return Ok(action_for_key(key));
            }
        }
        Ok(Action::None)
    }
}

/// Translate a key event into a game action.
///
/// Arrows, WASD, and lowercase vi keys all work; `q`, `Esc`, and Ctrl-C
/// quit. Anything else (including key releases) maps to [`Action::None`].
pub fn action_for_key(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Action::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Action::MoveRight
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Action::ShiftColumnUp
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Action::ShiftColumnDown
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
