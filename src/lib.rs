//! Strictly Rewind library - local tic-tac-toe with time travel
//!
//! The game engine keeps every board snapshot, so play can jump back to
//! any earlier move and continue from there.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation
//! - **History**: board snapshots with a movable current step
//! - **Navigator**: keyboard cursor state machine
//! - **Controller**: event commands and derived view for front ends
//! - **Front ends**: terminal UI and headless replay
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameController, Key};
//!
//! let mut game = GameController::new();
//! game.on_cell_click(4);
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! // The first key press only arms keyboard navigation.
//! game.on_key_down(&Key::ArrowRight);
//! assert!(game.is_cell_highlighted(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, RewindConfig};

// Crate-level exports - Front ends
pub use replay::{ReplayError, ReplayEvent, parse_script, replay};
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Coordinates, GameController, GameView, HistoryEntry, JumpError, Key, KeyboardNavigator,
    Move, MoveDescription, MoveHistory, MoveRejected, Navigation, Player, Position, SortOrder,
    Square, Status, WinningLine, evaluate,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
