//! Game controller: the single owner of game state.
//!
//! Front ends push events in through the `on_*` commands and pull the
//! derived view out through the query methods. Commands never fail
//! outward; a rejected command leaves every query unchanged.

use super::history::{MoveHistory, SortOrder};
use super::navigator::{Key, KeyboardNavigator, Navigation};
use super::rules::{self, WinningLine};
use super::{Board, HistoryEntry, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Status line shown above the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full, no line.
    #[display("It's a draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct MoveDescription {
    /// Step to jump to when selected.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the step on display (rendered bold).
    is_current: bool,
}

/// Serializable snapshot of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Marks in row-major order, `" "` for empty.
    pub board: Vec<String>,
    /// Status line text.
    pub status: String,
    /// Step on display.
    pub current_step: usize,
    /// Keyboard cursor as `[row, col]`, zero-based.
    pub cursor: Option<[usize; 2]>,
    /// Indexes of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Sort button text.
    pub sort_label: String,
    /// History list in display order.
    pub moves: Vec<MoveDescription>,
}

/// Orchestrates move history and keyboard navigation.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: MoveHistory,
    navigator: KeyboardNavigator,
    sort_order: SortOrder,
}

impl GameController {
    /// Starts a fresh game with the default (descending) history order.
    #[instrument]
    pub fn new() -> Self {
        info!("New game");
        Self::default()
    }

    /// Starts a fresh game listing history in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        info!("New game");
        Self {
            sort_order,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at cell `index` (0-8).
    #[instrument(skip(self))]
    pub fn on_cell_click(&mut self, index: usize) {
        match self.history.apply_move(index) {
            Ok(entry) => debug!(step = entry.step(), "Cell played"),
            Err(rejected) => debug!(%rejected, "Cell click ignored"),
        }
    }

    /// Feeds a key press to the navigator, playing at the cursor on Enter.
    #[instrument(skip(self))]
    pub fn on_key_down(&mut self, key: &Key) {
        if let Some(pos) = self.navigator.handle_key(key) {
            self.on_cell_click(pos.to_index());
        }
    }

    /// Displays the board recorded at `step`.
    #[instrument(skip(self))]
    pub fn on_jump(&mut self, step: usize) {
        if let Err(e) = self.history.jump_to(step) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Flips the history list order.
    #[instrument(skip(self), fields(sort_order = %self.sort_order))]
    pub fn on_toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history.current_entry().board()
    }

    /// Step on display.
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// Underlying move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Keyboard navigation state.
    pub fn navigation(&self) -> Navigation {
        self.navigator.state()
    }

    /// History list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(self.current_board())
    }

    /// Winner, draw, or whose turn it is.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            Status::Winner(line.player())
        } else if rules::is_full(self.current_board()) {
            Status::Draw
        } else {
            Status::NextPlayer(self.history.next_player())
        }
    }

    /// Whether cell `index` is under the keyboard cursor.
    pub fn is_cell_highlighted(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.navigator.is_highlighted(pos))
    }

    /// Whether cell `index` belongs to the winning line.
    pub fn is_cell_winning(&self, index: usize) -> bool {
        match (Position::from_index(index), self.winning_line()) {
            (Some(pos), Some(line)) => line.contains(pos),
            _ => false,
        }
    }

    /// Sort button text, naming the order currently applied.
    pub fn sort_button_label(&self) -> &'static str {
        match self.sort_order {
            SortOrder::Ascending => "Sort history ascending",
            SortOrder::Descending => "Sort history descending",
        }
    }

    /// History list rows in display order.
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        let current = self.history.current_step();
        self.history
            .sorted_view(self.sort_order)
            .into_iter()
            .map(|entry| {
                MoveDescription::new(*entry.step(), describe(entry), *entry.step() == current)
            })
            .collect()
    }

    /// Snapshot of every query, for headless front ends.
    pub fn view(&self) -> GameView {
        GameView {
            board: self
                .current_board()
                .squares()
                .iter()
                .map(|square| square.symbol().to_string())
                .collect(),
            status: self.status().to_string(),
            current_step: self.current_step(),
            cursor: self.navigation().cursor().map(|pos| [pos.row(), pos.col()]),
            winning_line: self.winning_line().map(|line| line.indexes()),
            sort_label: self.sort_button_label().to_string(),
            moves: self.move_descriptions(),
        }
    }
}

fn describe(entry: &HistoryEntry) -> String {
    match entry.mv() {
        Some(mv) => {
            let at = mv.coordinates();
            format!("Go to move #{} ({}, {})", entry.step(), at.col, at.row)
        }
        None => "Go to game start".to_string(),
    }
}
