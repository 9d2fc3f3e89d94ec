//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a control.
pub fn map_code(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Control::MoveForward),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Control::MoveBackward),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Control::RotateLeft),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Control::RotateRight),
        KeyCode::Char(' ') => Some(Control::Fire),
        _ => None,
    }
}

/// Map keyboard input to a control.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    map_code(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(Control::MoveForward));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('S'))), Some(Control::MoveBackward));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Control::MoveForward));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Control::MoveBackward));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Control::RotateLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('D'))), Some(Control::RotateRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Control::RotateLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Control::RotateRight));
    }

    #[test]
    fn test_fire_and_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Control::Fire));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
