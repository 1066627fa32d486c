//! Key mapping from terminal events to console buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a button.
pub fn handle_key_event(key: KeyEvent) -> Option<Button> {
    match key.code {
        // D-pad
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Button::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Button::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Button::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Button::Right),

        // Face buttons
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Button::A)
        }
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Button::B),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Button::X),

        // Pause
        KeyCode::Tab | KeyCode::Char('p') | KeyCode::Char('P') => Some(Button::Select),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_dpad_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(Button::Up));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Button::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Button::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Button::Right)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(Button::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(Button::Right)
        );
    }

    #[test]
    fn test_face_buttons() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Button::A)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Button::A)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('B'))),
            Some(Button::B)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(Button::X)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(Button::Select)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
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
