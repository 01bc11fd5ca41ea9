//! Headless replay of scripted game events.
//!
//! A script holds one event per line:
//!
//! ```text
//! # X takes the centre, O the corner
//! click 4
//! click 0
//! key ArrowDown
//! jump 1
//! sort
//! ```
//!
//! Blank lines and `#` comments are skipped.

use crate::games::tictactoe::{GameController, Key};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A single front-end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    /// Cell click by index.
    Click(usize),
    /// Key press by DOM key name.
    Key(Key),
    /// History selection by step.
    Jump(usize),
    /// Sort button press.
    ToggleSort,
}

impl ReplayEvent {
    /// Applies the event to `controller`.
    pub fn apply(&self, controller: &mut GameController) {
        match self {
            ReplayEvent::Click(index) => controller.on_cell_click(*index),
            ReplayEvent::Key(key) => controller.on_key_down(key),
            ReplayEvent::Jump(step) => controller.on_jump(*step),
            ReplayEvent::ToggleSort => controller.on_toggle_sort(),
        }
    }
}

/// Script parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error on line {}: {} at {}:{}", script_line, message, file, line)]
pub struct ReplayError {
    /// One-based line of the script.
    pub script_line: usize,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error for script line `script_line`.
    #[track_caller]
    pub fn new(script_line: usize, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            script_line,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a whole script.
#[instrument(skip(script))]
pub fn parse_script(script: &str) -> Result<Vec<ReplayEvent>, ReplayError> {
    let mut events = Vec::new();
    for (number, raw) in script.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        events.push(parse_line(number + 1, text)?);
    }
    debug!(count = events.len(), "Script parsed");
    Ok(events)
}

fn parse_line(number: usize, text: &str) -> Result<ReplayEvent, ReplayError> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();
    if words.next().is_some() {
        return Err(ReplayError::new(number, format!("Too many arguments: {}", text)));
    }

    let number_arg = |what: &str| -> Result<usize, ReplayError> {
        let raw = argument.ok_or_else(|| ReplayError::new(number, format!("Missing {}", what)))?;
        raw.parse()
            .map_err(|_| ReplayError::new(number, format!("Invalid {}: {}", what, raw)))
    };

    match (command, argument) {
        ("click", _) => Ok(ReplayEvent::Click(number_arg("cell index")?)),
        ("jump", _) => Ok(ReplayEvent::Jump(number_arg("step")?)),
        ("key", Some(name)) => match name.parse::<Key>() {
            Ok(key) => Ok(ReplayEvent::Key(key)),
            Err(e) => Err(ReplayError::new(number, format!("Invalid key {}: {}", name, e))),
        },
        ("key", None) => Err(ReplayError::new(number, "Missing key name")),
        ("sort", None) => Ok(ReplayEvent::ToggleSort),
        _ => Err(ReplayError::new(number, format!("Unknown event: {}", text))),
    }
}

/// Runs `events` against a controller.
#[instrument(skip_all, fields(events = events.len()))]
pub fn replay(controller: &mut GameController, events: &[ReplayEvent]) {
    for event in events {
        debug!(?event, "Replaying event");
        event.apply(controller);
    }
}
