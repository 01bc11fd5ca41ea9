mod action;
mod controller;
mod history;
mod navigator;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Coordinates, Move, MoveRejected};
pub use controller::{GameController, GameView, MoveDescription, Status};
pub use history::{HistoryEntry, JumpError, MoveHistory, SortOrder};
pub use navigator::{Key, KeyboardNavigator, Navigation};
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use types::{Board, Player, Square};
