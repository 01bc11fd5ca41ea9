//! Stateless UI rendering for the game.
//!
//! Drawing returns a [`HitMap`] recording where each clickable element
//! landed, so mouse clicks can be resolved against the last frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{GameController, Player, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Clickable element of the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Board cell by index.
    Cell(usize),
    /// The sort button.
    SortButton,
    /// History row by step.
    Move(usize),
}

/// Screen areas of clickable elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<Rect>,
    sort_button: Rect,
    moves: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Resolves a terminal cell to the element drawn there.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = ScreenPosition::new(column, row);
        if let Some(index) = self.cells.iter().position(|r| r.contains(point)) {
            return Some(Target::Cell(index));
        }
        if self.sort_button.contains(point) {
            return Some(Target::SortButton);
        }
        self.moves
            .iter()
            .find(|(r, _)| r.contains(point))
            .map(|(_, step)| Target::Move(*step))
    }
}

/// Renders the board and the info panel.
pub fn draw(frame: &mut Frame, controller: &GameController) -> HitMap {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Game
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let game = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 4), Constraint::Min(30)])
        .split(chunks[1]);

    let cells = draw_board(frame, game[0], controller);
    let (sort_button, moves) = draw_info(frame, game[1], controller);

    let help = Paragraph::new("arrows/enter: play  0-9: jump  s: sort  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    HitMap {
        cells,
        sort_button,
        moves,
    }
}

fn draw_board(frame: &mut Frame, area: Rect, controller: &GameController) -> Vec<Rect> {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = controller.current_board();
    let mut cells = Vec::with_capacity(9);
    for (index, square) in board.squares().iter().enumerate() {
        let (row, col) = (index as u16 / 3, index as u16 % 3);
        let cell = Rect::new(
            inner.x + col * CELL_WIDTH,
            inner.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner);
        draw_cell(frame, cell, *square, cell_style(controller, index, *square));
        cells.push(cell);
    }
    cells
}

fn cell_style(controller: &GameController, index: usize, square: Square) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    // Winning takes precedence over the keyboard cursor.
    if controller.is_cell_winning(index) {
        base.bg(Color::Black).fg(Color::White)
    } else if controller.is_cell_highlighted(index) {
        base.bg(Color::Gray).fg(Color::White)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, style: Style) {
    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", square.symbol()), style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_info(
    frame: &mut Frame,
    area: Rect,
    controller: &GameController,
) -> (Rect, Vec<(Rect, usize)>) {
    let block = Block::default().borders(Borders::ALL).title("Game");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line_at = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1).intersection(inner);

    let status = Paragraph::new(controller.status().to_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(status, line_at(0));

    let sort_button = line_at(1);
    let label = Paragraph::new(format!("[ {} ]", controller.sort_button_label()))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(label, sort_button);

    let mut moves = Vec::new();
    for (offset, description) in (3u16..).zip(controller.move_descriptions()) {
        let row = line_at(offset);
        if row.height == 0 {
            break;
        }
        let style = if *description.is_current() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let number = moves.len() + 1;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{}. {}", number, description.label()),
                style,
            ))),
            row,
        );
        moves.push((row, *description.step()));
    }

    (sort_button, moves)
}
