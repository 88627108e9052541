use crate::board::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Quit,
}

pub fn decode(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Steer(Direction::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        _ => None,
    }
}
