//! Monotonic board invariant: each ply fills exactly one empty square.

use super::super::{Board, MoveHistory, Square};
use super::Invariant;

/// Invariant: The first board is empty and every later board equals
/// its predecessor with only the recorded move's square filled.
pub struct MonotonicBoardInvariant;

impl Invariant<MoveHistory> for MonotonicBoardInvariant {
    fn holds(history: &MoveHistory) -> bool {
        let entries = history.entries();

        if entries.first().map(|e| e.board()) != Some(&Board::new()) {
            return false;
        }

        entries.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mv) = after.mv() else {
                return false;
            };
            if !before.board().is_empty(mv.position) {
                return false;
            }
            let mut expected = before.board().clone();
            expected.set(mv.position, Square::Occupied(mv.player));
            &expected == after.board()
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to the previous board"
    }
}
