//! Draw detection and overall board status.

use super::win::detect_winner;
use crate::{Board, GameStatus, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the status of a board.
///
/// A win takes precedence over a full board, so exactly one status applies.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = detect_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(detect_winner(&board), None);
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Symbol::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board: Board = "XO. ... ...".parse().unwrap();
        assert_eq!(status(&board), GameStatus::InProgress);
    }
}
