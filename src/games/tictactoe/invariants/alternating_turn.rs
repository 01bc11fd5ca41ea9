//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{MoveHistory, Player};
use super::Invariant;

/// Invariant: The move recorded at step `n` was made by the player to
/// move at step `n - 1`, so X opens and marks alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveHistory> for AlternatingTurnInvariant {
    fn holds(history: &MoveHistory) -> bool {
        history.entries().iter().skip(1).all(|entry| {
            entry
                .mv()
                .is_some_and(|mv| mv.player == Player::for_step(entry.step() - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with X"
    }
}
