//! Translation of terminal key codes into front-end actions.

use crate::games::tictactoe::Key;
use crossterm::event::KeyCode;

/// What a key press asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Throw the game away and start over.
    Restart,
    /// Flip the history list order.
    ToggleSort,
    /// Jump to the given step.
    Jump(usize),
    /// Forward to keyboard navigation.
    Navigate(Key),
}

/// Maps a key code to an action.
///
/// Front-end shortcuts are claimed first; everything else, arrows and
/// Enter included, is forwarded to keyboard navigation under its DOM
/// key name.
pub fn map_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('s') => Action::ToggleSort,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Action::Jump(c.to_digit(10).map_or(0, |d| d as usize))
        }
        KeyCode::Left => Action::Navigate(Key::ArrowLeft),
        KeyCode::Right => Action::Navigate(Key::ArrowRight),
        KeyCode::Up => Action::Navigate(Key::ArrowUp),
        KeyCode::Down => Action::Navigate(Key::ArrowDown),
        KeyCode::Enter => Action::Navigate(Key::Enter),
        KeyCode::Char(c) => Action::Navigate(Key::Other(c.to_string())),
        other => Action::Navigate(Key::Other(format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_forward_dom_names() {
        assert_eq!(map_key(KeyCode::Left), Action::Navigate(Key::ArrowLeft));
        assert_eq!(map_key(KeyCode::Down), Action::Navigate(Key::ArrowDown));
        assert_eq!(map_key(KeyCode::Enter), Action::Navigate(Key::Enter));
    }

    #[test]
    fn test_shortcuts_claimed() {
        assert_eq!(map_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(map_key(KeyCode::Esc), Action::Quit);
        assert_eq!(map_key(KeyCode::Char('s')), Action::ToggleSort);
        assert_eq!(map_key(KeyCode::Char('7')), Action::Jump(7));
    }

    #[test]
    fn test_other_keys_arm_navigation() {
        assert_eq!(
            map_key(KeyCode::Char('x')),
            Action::Navigate(Key::Other("x".into()))
        );
        assert_eq!(map_key(KeyCode::Tab), Action::Navigate(Key::Other("Tab".into())));
    }
}
