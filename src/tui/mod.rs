//! Terminal UI for Strictly Rewind.

mod app;
mod input;
mod ui;

use app::App;
use ui::{HitMap, draw};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::RewindConfig;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.initial_sort());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, then block on the next terminal event.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut hit_map = HitMap::default();
        terminal.draw(|frame| hit_map = draw(frame, app.controller()))?;
        app.set_hit_map(hit_map);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            other => debug!(?other, "Ignoring terminal event"),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
