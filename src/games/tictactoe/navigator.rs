//! Keyboard navigation over the board.
//!
//! The navigator starts inactive. The first key press of any kind only
//! arms it, placing the cursor on the top-left cell without applying
//! the key. After that, arrow keys move the cursor one cell, clamped at
//! the board edges, and Enter selects the cell under the cursor.

use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A key press, named after DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
pub enum Key {
    /// Move the cursor one column left.
    ArrowLeft,
    /// Move the cursor one column right.
    ArrowRight,
    /// Move the cursor one row up.
    ArrowUp,
    /// Move the cursor one row down.
    ArrowDown,
    /// Play at the cursor.
    Enter,
    /// Any other key, by name.
    #[strum(default)]
    Other(String),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Other(name) => write!(f, "{}", name),
            named => write!(f, "{}", named.as_ref()),
        }
    }
}

/// Navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Navigation {
    /// No cell highlighted.
    #[default]
    Inactive,
    /// Cursor on the given cell.
    Active(Position),
}

impl Navigation {
    /// Cursor position, if navigation is armed.
    pub fn cursor(self) -> Option<Position> {
        match self {
            Navigation::Inactive => None,
            Navigation::Active(pos) => Some(pos),
        }
    }
}

/// State machine translating key presses into cursor moves and selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardNavigator {
    state: Navigation,
}

impl KeyboardNavigator {
    /// Creates an inactive navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current navigation state.
    pub fn state(&self) -> Navigation {
        self.state
    }

    /// Whether `pos` is under the cursor.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.state.cursor() == Some(pos)
    }

    /// Handles a key press.
    ///
    /// Returns the selected cell when Enter is pressed on an armed
    /// navigator; every other key yields `None`.
    #[instrument(skip(self, key), fields(state = ?self.state, key = %key))]
    pub fn handle_key(&mut self, key: &Key) -> Option<Position> {
        let Navigation::Active(cursor) = self.state else {
            debug!("Arming keyboard navigation");
            self.state = Navigation::Active(Position::TopLeft);
            return None;
        };

        let (row, col) = (cursor.row(), cursor.col());
        let target = match key {
            Key::ArrowLeft => (row, col.saturating_sub(1)),
            Key::ArrowRight => (row, (col + 1).min(2)),
            Key::ArrowUp => (row.saturating_sub(1), col),
            Key::ArrowDown => ((row + 1).min(2), col),
            Key::Enter => return Some(cursor),
            Key::Other(_) => return None,
        };

        match Position::from_row_col(target.0, target.1) {
            Some(next) if next != cursor => {
                debug!(from = %cursor, to = %next, "Cursor moved");
                self.state = Navigation::Active(next);
            }
            _ => debug!("Cursor at edge"),
        }
        None
    }
}
