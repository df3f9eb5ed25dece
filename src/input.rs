use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geom::Vector;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Vector),
    Pause,
    Restart,
    Faster,
    Slower,
    Quit,
}

impl Command {
    pub fn from_key(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        let cmd = match ev.code {
            KeyCode::Left | KeyCode::Char('h') => Command::Steer(Vector::LEFT),
            KeyCode::Down | KeyCode::Char('j') => Command::Steer(Vector::DOWN),
            KeyCode::Up | KeyCode::Char('k') => Command::Steer(Vector::UP),
            KeyCode::Right | KeyCode::Char('l') => Command::Steer(Vector::RIGHT),
            KeyCode::Char('p') => Command::Pause,
            KeyCode::Char('r') => Command::Restart,
            KeyCode::Char('+') => Command::Faster,
            KeyCode::Char('-') => Command::Slower,
            KeyCode::Char('q') => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
