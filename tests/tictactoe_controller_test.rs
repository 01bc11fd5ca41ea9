//! End-to-end scenarios driven through the game controller.

use strictly_rewind::{GameController, Key, Navigation, Player, Position, SortOrder, Square, Status};

fn click_all(game: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        game.on_cell_click(cell);
    }
}

#[test]
fn test_first_click_hands_turn_to_o() {
    let mut game = GameController::new();
    game.on_cell_click(4);
    assert_eq!(game.status().to_string(), "Next player: O");
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_top_row_wins_for_x() {
    let mut game = GameController::new();
    click_all(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.winning_line().map(|l| l.indexes()), Some([0, 1, 2]));
    assert!(game.is_cell_winning(1));
    assert!(!game.is_cell_winning(3));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    click_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.current_step(), 9);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "It's a draw");
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut game = GameController::new();
    // X O O / O O X / X X X
    click_all(&mut game, &[0, 1, 5, 2, 6, 3, 7, 4, 8]);
    assert_eq!(game.current_step(), 9);
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.winning_line().map(|l| l.indexes()), Some([6, 7, 8]));
}

#[test]
fn test_jump_then_click_truncates_history() {
    let mut game = GameController::new();
    click_all(&mut game, &[0, 1, 2]);
    game.on_jump(1);
    assert_eq!(game.status().to_string(), "Next player: O");
    game.on_cell_click(8);

    let steps: Vec<usize> = game.history().entries().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![0, 1, 2]);
    assert_eq!(game.current_board().get(Position::TopCenter), Square::Empty);
}

#[test]
fn test_first_arrow_only_arms_navigation() {
    let mut game = GameController::new();
    game.on_key_down(&Key::ArrowRight);
    assert_eq!(game.navigation(), Navigation::Active(Position::TopLeft));
    game.on_key_down(&Key::ArrowRight);
    assert_eq!(game.navigation(), Navigation::Active(Position::TopCenter));
    assert!(game.is_cell_highlighted(1));
    assert!(!game.is_cell_highlighted(0));
}

#[test]
fn test_toggle_sort_flips_label_and_order() {
    let mut game = GameController::new();
    click_all(&mut game, &[4, 0]);

    assert_eq!(game.sort_button_label(), "Sort history descending");
    let before: Vec<usize> = game.move_descriptions().iter().map(|d| *d.step()).collect();
    assert_eq!(before, vec![2, 1, 0]);

    game.on_toggle_sort();
    assert_eq!(game.sort_order(), SortOrder::Ascending);
    assert_eq!(game.sort_button_label(), "Sort history ascending");
    let after: Vec<usize> = game.move_descriptions().iter().map(|d| *d.step()).collect();
    assert_eq!(after, vec![0, 1, 2]);

    game.on_toggle_sort();
    assert_eq!(game.sort_button_label(), "Sort history descending");
}

#[test]
fn test_move_labels_and_current_marker() {
    let mut game = GameController::with_sort_order(SortOrder::Ascending);
    click_all(&mut game, &[4, 2]);
    game.on_jump(1);

    let moves = game.move_descriptions();
    let labels: Vec<&str> = moves.iter().map(|d| d.label().as_str()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1 (2, 2)", "Go to move #2 (3, 1)"]
    );
    let current: Vec<bool> = moves.iter().map(|d| *d.is_current()).collect();
    assert_eq!(current, vec![false, true, false]);
}

#[test]
fn test_rejected_click_changes_nothing() {
    let mut game = GameController::new();
    click_all(&mut game, &[4]);
    let before = game.view();
    game.on_cell_click(4);
    game.on_cell_click(42);
    game.on_jump(9);
    assert_eq!(game.view(), before);
}

#[test]
fn test_enter_plays_and_respects_rejection() {
    let mut game = GameController::new();
    game.on_key_down(&Key::Other("Shift".into()));
    game.on_key_down(&Key::Enter);
    assert_eq!(game.current_step(), 1);

    // Same cell again: occupied, nothing happens.
    game.on_key_down(&Key::Enter);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}
