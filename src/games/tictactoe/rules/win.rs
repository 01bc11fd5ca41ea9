//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in evaluation order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions forming the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Board indexes of the line.
    pub fn indexes(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Evaluates the board, returning the first completed line.
///
/// Returns `None` when no line is complete. If a board holds more
/// than one completed line, the earliest in [`LINES`] order wins.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let [a, b, c] = positions;
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some(WinningLine { positions, player })
    })
}
