//! Key bindings.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single key press asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Action(GameAction),
    Quit,
}

/// Help text shown in the side panel, one `(keys, meaning)` pair per line.
pub const KEY_HELP: [(&str, &str); 8] = [
    ("←/→", "move"),
    ("↑", "rotate"),
    ("z", "rotate ccw"),
    ("↓", "soft drop"),
    ("space", "hard drop"),
    ("c", "hold"),
    ("p", "pause"),
    ("r/q", "restart/quit"),
];

/// Translate a key event. Releases and unbound keys map to `None`.
///
/// Letter bindings are case-insensitive. Ctrl-C always quits, so it never
/// reaches the `c` hold binding.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::RotateCw,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'h' | 'a' => GameAction::MoveLeft,
            'l' | 'd' => GameAction::MoveRight,
            'j' | 's' => GameAction::SoftDrop,
            'k' | 'w' | 'x' => GameAction::RotateCw,
            'z' | 'y' => GameAction::RotateCcw,
            ' ' => GameAction::HardDrop,
            'c' => GameAction::Hold,
            'p' => GameAction::Pause,
            'r' => GameAction::Restart,
            'q' => return Some(KeyCommand::Quit),
            _ => return None,
        },
        KeyCode::Esc => return Some(KeyCommand::Quit),
        _ => return None,
    };

    Some(KeyCommand::Action(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Option<KeyCommand> {
        map_key(KeyEvent::from(code))
    }

    fn action(a: GameAction) -> Option<KeyCommand> {
        Some(KeyCommand::Action(a))
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(press(KeyCode::Left), action(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Right), action(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Down), action(GameAction::SoftDrop));
        assert_eq!(press(KeyCode::Up), action(GameAction::RotateCw));
    }

    #[test]
    fn letter_bindings_ignore_case() {
        assert_eq!(press(KeyCode::Char('H')), action(GameAction::MoveLeft));
        assert_eq!(press(KeyCode::Char('d')), action(GameAction::MoveRight));
        assert_eq!(press(KeyCode::Char('Z')), action(GameAction::RotateCcw));
        assert_eq!(press(KeyCode::Char('C')), action(GameAction::Hold));
        assert_eq!(press(KeyCode::Char('P')), action(GameAction::Pause));
        assert_eq!(press(KeyCode::Char('r')), action(GameAction::Restart));
    }

    #[test]
    fn space_hard_drops() {
        assert_eq!(press(KeyCode::Char(' ')), action(GameAction::HardDrop));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), Some(KeyCommand::Quit));
        assert_eq!(press(KeyCode::Esc), Some(KeyCommand::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyCommand::Quit)
        );
    }

    #[test]
    fn other_control_chords_are_ignored() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(press(KeyCode::Char('m')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }
}
