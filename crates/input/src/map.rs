//! Key mapping from terminal events to session inputs.

use crate::types::{Direction, Input, Variant};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an input for the given variant.
pub fn map_key(key: KeyEvent, variant: Variant) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Input::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Input::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Input::Move(Direction::Down))
        }
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => match variant {
            Variant::FallingBlock => Some(Input::RotateCw),
            Variant::TileMerge => Some(Input::Move(Direction::Up)),
        },

        // Actions
        KeyCode::Char(' ') if variant == Variant::FallingBlock => Some(Input::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Input::Pause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode, variant: Variant) -> Option<Input> {
        map_key(KeyEvent::from(code), variant)
    }

    #[test]
    fn test_movement_keys() {
        for variant in [Variant::FallingBlock, Variant::TileMerge] {
            assert_eq!(press(KeyCode::Left, variant), Some(Input::Move(Direction::Left)));
            assert_eq!(press(KeyCode::Right, variant), Some(Input::Move(Direction::Right)));
            assert_eq!(press(KeyCode::Down, variant), Some(Input::Move(Direction::Down)));
            assert_eq!(press(KeyCode::Char('H'), variant), Some(Input::Move(Direction::Left)));
            assert_eq!(press(KeyCode::Char('d'), variant), Some(Input::Move(Direction::Right)));
            assert_eq!(press(KeyCode::Char('J'), variant), Some(Input::Move(Direction::Down)));
        }
    }

    #[test]
    fn test_up_depends_on_variant() {
        assert_eq!(press(KeyCode::Up, Variant::FallingBlock), Some(Input::RotateCw));
        assert_eq!(press(KeyCode::Char('w'), Variant::FallingBlock), Some(Input::RotateCw));
        assert_eq!(press(KeyCode::Up, Variant::TileMerge), Some(Input::Move(Direction::Up)));
        assert_eq!(press(KeyCode::Char('K'), Variant::TileMerge), Some(Input::Move(Direction::Up)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char(' '), Variant::FallingBlock), Some(Input::HardDrop));
        assert_eq!(press(KeyCode::Char(' '), Variant::TileMerge), None);
        assert_eq!(press(KeyCode::Char('p'), Variant::TileMerge), Some(Input::Pause));
        assert_eq!(press(KeyCode::Char('R'), Variant::FallingBlock), Some(Input::Restart));
        assert_eq!(press(KeyCode::Char('x'), Variant::FallingBlock), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Variant::FallingBlock),
            None
        );
    }
}
