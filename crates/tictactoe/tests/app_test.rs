//! Tests for TUI key and mouse handling.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe::{App, Control};
use tictactoe_core::{Board, Outcome, Phase, Position, Square, StrategyKind, Symbol};

fn grid() -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for (idx, cell) in cells.iter_mut().enumerate() {
        let (row, col) = (idx as u16 / 3, idx as u16 % 3);
        *cell = Rect::new(col * 10, row * 4, 9, 3);
    }
    cells
}

#[test]
fn test_symbol_choice_keys() {
    let mut app = App::new(StrategyKind::Heuristic, None);
    assert_eq!(app.game().phase(), Phase::AwaitingSymbolChoice);

    app.handle_key(KeyCode::Char('o'));
    assert_eq!(app.game().human_symbol(), Some(Symbol::O));
    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Symbol::X));
}

#[test]
fn test_digit_keys_place_marks() {
    let mut app = App::new(StrategyKind::Heuristic, Some(Symbol::X));
    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Symbol::X));
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.notice(), None);
}

#[test]
fn test_cursor_and_enter() {
    let mut app = App::new(StrategyKind::Heuristic, Some(Symbol::X));
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().board().get(Position::TopRight), Square::Occupied(Symbol::X));
}

#[test]
fn test_occupied_square_leaves_notice_only() {
    let mut app = App::new(StrategyKind::Heuristic, Some(Symbol::O));
    let before: Board = app.game().board().clone();

    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.game().board(), &before);
    assert_eq!(app.notice(), Some("Square Center is already occupied"));

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.notice(), None);
}

#[test]
fn test_mouse_click_hits_cell() {
    let mut app = App::new(StrategyKind::Heuristic, Some(Symbol::X));
    app.set_cell_areas(grid());

    // Inside the bottom-right cell.
    app.handle_click(24, 9);
    assert_eq!(app.game().board().get(Position::BottomRight), Square::Occupied(Symbol::X));

    // Between cells: ignored.
    let before = app.game().board().clone();
    app.handle_click(9, 0);
    assert_eq!(app.game().board(), &before);
}

#[test]
fn test_new_game_reuses_preset_symbol() {
    let mut app = App::new(StrategyKind::Heuristic, Some(Symbol::O));
    app.handle_key(KeyCode::Char('2'));
    app.handle_key(KeyCode::Char('4'));
    assert_eq!(app.game().phase(), Phase::Terminal(Outcome::Winner(Symbol::X)));

    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.game().human_symbol(), Some(Symbol::O));
    assert_eq!(app.game().board().empty_count(), 8);
    assert_eq!(app.game().phase(), Phase::HumanTurn);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(StrategyKind::Heuristic, None);
    assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
    assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
}
