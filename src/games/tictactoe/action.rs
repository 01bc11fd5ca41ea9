//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events recorded in the history, not side effects.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// One-based display coordinates of the filled cell.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            row: self.position.row() + 1,
            col: self.position.col() + 1,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// One-based row and column of a cell, as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Row, 1 to 3 from the top.
    pub row: usize,
    /// Column, 1 to 3 from the left.
    pub col: usize,
}

/// Reason a move was refused. Rejection never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}
