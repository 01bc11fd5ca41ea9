//! History consistency invariant: steps are contiguous and match their moves.

use super::super::MoveHistory;
use super::Invariant;

/// Invariant: Entry `i` carries step `i`, only step 0 lacks a move,
/// and the cursor points at a stored entry.
pub struct HistoryConsistentInvariant;

impl Invariant<MoveHistory> for HistoryConsistentInvariant {
    fn holds(history: &MoveHistory) -> bool {
        let entries = history.entries();

        let steps_contiguous = entries.iter().enumerate().all(|(i, entry)| {
            *entry.step() == i && entry.mv().is_some() == (i > 0)
        });

        steps_contiguous && history.current_step() < entries.len()
    }

    fn description() -> &'static str {
        "History steps are contiguous from 0 and every ply records its move"
    }
}
