//! Move history with time travel.
//!
//! The history is a sequence of board snapshots, one per ply, plus a
//! cursor naming the step currently on display. Jumping only moves the
//! cursor; playing a move from an earlier step discards every later
//! snapshot before appending the new one.

use super::action::{Move, MoveRejected};
use super::rules;
use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after `step` plies.
    pub(super) board: Board,
    /// Position in play order; 0 is the empty board.
    pub(super) step: usize,
    /// The move that produced this board, absent for step 0.
    #[serde(rename = "move")]
    pub(super) mv: Option<Move>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            step: 0,
            mv: None,
        }
    }
}

/// Presentation order of the history list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest step first.
    Ascending,
    /// Newest step first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Refused jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// No entry with that step exists.
    #[display("No history entry for step {} (history has {} entries)", step, len)]
    UnknownStep {
        /// Requested step.
        step: usize,
        /// Number of stored entries.
        len: usize,
    },
}

/// Append-only-with-truncation sequence of board snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    pub(super) entries: Vec<HistoryEntry>,
    pub(super) current_step: usize,
}

impl MoveHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            current_step: 0,
        }
    }

    /// All stored entries in play order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Step currently on display.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.current_step]
    }

    /// Player whose turn it is at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Plays the next mark at `index` (0-8) from the current step.
    ///
    /// Any entries after the current step are discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] when the current board already has a
    /// winner, the square is occupied, or the index is out of range.
    /// The history is left untouched in every error case.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> Result<&HistoryEntry, MoveRejected> {
        let position = Position::from_index(index).ok_or(MoveRejected::OutOfBounds(index))?;
        let board = &self.current_entry().board;

        if rules::evaluate(board).is_some() {
            return Err(MoveRejected::GameOver);
        }
        if !board.is_empty(position) {
            return Err(MoveRejected::SquareOccupied(position));
        }

        let player = self.next_player();
        let mut board = board.clone();
        board.set(position, Square::Occupied(player));

        let discarded = self.entries.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future history");
        }
        self.entries.truncate(self.current_step + 1);

        let step = self.current_step + 1;
        self.entries.push(HistoryEntry {
            board,
            step,
            mv: Some(Move::new(player, position)),
        });
        self.current_step = step;
        debug!(step, %player, %position, "Move applied");

        #[cfg(debug_assertions)]
        self.verify_invariants();

        Ok(self.current_entry())
    }

    #[cfg(debug_assertions)]
    fn verify_invariants(&self) {
        use super::invariants::{HistoryInvariants, InvariantSet};

        if let Err(violations) = HistoryInvariants::check_all(self) {
            tracing::error!(?violations, "History invariants violated");
            debug_assert!(violations.is_empty(), "history invariants violated");
        }
    }

    /// Moves the cursor to `step` without touching stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::UnknownStep`] if no entry has that step.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.entries.len() {
            warn!(step, len = self.entries.len(), "Jump to unknown step");
            return Err(JumpError::UnknownStep {
                step,
                len: self.entries.len(),
            });
        }
        self.current_step = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// All entries ordered by step; stored order is unchanged.
    pub fn sorted_view(&self, order: SortOrder) -> Vec<&HistoryEntry> {
        let mut view: Vec<_> = self.entries.iter().collect();
        match order {
            SortOrder::Ascending => view.sort_by_key(|entry| entry.step),
            SortOrder::Descending => view.sort_by_key(|entry| std::cmp::Reverse(entry.step)),
        }
        view
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(indexes: &[usize]) -> MoveHistory {
        let mut history = MoveHistory::new();
        for &index in indexes {
            history.apply_move(index).expect("legal move");
        }
        history
    }

    #[test]
    fn test_new_history_has_empty_initial_entry() {
        let history = MoveHistory::new();
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.current_step(), 0);
        assert_eq!(history.current_entry().board(), &Board::new());
        assert_eq!(history.current_entry().mv(), &None);
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let history = played(&[4, 0]);
        assert_eq!(history.current_step(), 2);
        let entry = history.current_entry();
        assert_eq!(*entry.step(), 2);
        assert_eq!(entry.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(entry.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(*entry.mv(), Some(Move::new(Player::O, Position::TopLeft)));
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut history = played(&[4]);
        let before = history.clone();
        assert_eq!(
            history.apply_move(4),
            Err(MoveRejected::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut history = MoveHistory::new();
        assert_eq!(history.apply_move(9), Err(MoveRejected::OutOfBounds(9)));
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut history = played(&[0, 3, 1, 4, 2]);
        let before = history.clone();
        for index in [5, 6, 7, 8] {
            assert_eq!(history.apply_move(index), Err(MoveRejected::GameOver));
        }
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_keeps_entries() {
        let mut history = played(&[0, 1, 2]);
        history.jump_to(1).expect("valid step");
        assert_eq!(history.current_step(), 1);
        assert_eq!(history.entries().len(), 4);
        assert_eq!(history.current_entry().board().occupied(), 1);
        assert_eq!(history.next_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut history = played(&[0]);
        assert_eq!(
            history.jump_to(2),
            Err(JumpError::UnknownStep { step: 2, len: 2 })
        );
        assert_eq!(history.current_step(), 1);
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut history = played(&[0, 1, 2]);
        history.jump_to(1).expect("valid step");
        history.apply_move(8).expect("legal move");
        let steps: Vec<_> = history.entries().iter().map(|e| *e.step()).collect();
        assert_eq!(steps, vec![0, 1, 2]);
        assert_eq!(history.current_step(), 2);
        assert_eq!(
            *history.current_entry().mv(),
            Some(Move::new(Player::O, Position::BottomRight))
        );
    }

    #[test]
    fn test_sorted_view_orders_by_step() {
        let history = played(&[0, 1]);
        let asc: Vec<_> = history
            .sorted_view(SortOrder::Ascending)
            .iter()
            .map(|e| *e.step())
            .collect();
        let desc: Vec<_> = history
            .sorted_view(SortOrder::Descending)
            .iter()
            .map(|e| *e.step())
            .collect();
        assert_eq!(asc, vec![0, 1, 2]);
        assert_eq!(desc, vec![2, 1, 0]);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!("ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
    }
}
