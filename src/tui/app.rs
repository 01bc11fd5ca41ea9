//! Application state and event handling.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use super::input::{Action, map_key};
use super::ui::{HitMap, Target};
use crate::games::tictactoe::{GameController, SortOrder};

/// Main application state.
pub struct App {
    controller: GameController,
    initial_sort: SortOrder,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(initial_sort: SortOrder) -> Self {
        Self {
            controller: GameController::with_sort_order(initial_sort),
            initial_sort,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the last frame placed clickable elements.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        let action = map_key(code);
        debug!(?action, "Handling key");

        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Restart => self.restart(),
            Action::ToggleSort => self.controller.on_toggle_sort(),
            Action::Jump(step) => self.controller.on_jump(step),
            Action::Navigate(key) => self.controller.on_key_down(&key),
        }
    }

    /// Handles a mouse event; only left clicks act.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let target = self.hit_map.hit(event.column, event.row);
        debug!(?target, column = event.column, row = event.row, "Handling click");

        match target {
            Some(Target::Cell(index)) => self.controller.on_cell_click(index),
            Some(Target::SortButton) => self.controller.on_toggle_sort(),
            Some(Target::Move(step)) => self.controller.on_jump(step),
            None => {}
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.controller = GameController::with_sort_order(self.initial_sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Navigation, Position};
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys_drive_controller() {
        let mut app = App::new(SortOrder::Descending);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(
            app.controller().navigation(),
            Navigation::Active(Position::TopCenter)
        );
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.controller().current_step(), 1);

        app.handle_key(KeyCode::Char('0'));
        assert_eq!(app.controller().current_step(), 0);

        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller().sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_restart_keeps_configured_order() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.controller().current_step(), 0);
        assert_eq!(app.controller().sort_order(), SortOrder::Ascending);
        assert_eq!(app.controller().navigation(), Navigation::Inactive);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Descending);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_clicks_without_frame_are_ignored() {
        let mut app = App::new(SortOrder::Descending);
        app.handle_mouse(click(3, 3));
        assert_eq!(app.controller().current_step(), 0);
    }
}
