//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Symbol};
use tracing::instrument;

/// The eight lines that win the game: rows, then columns, then diagonals.
///
/// Scan order matters to the computer opponent, which takes the first line
/// it can complete or must block.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first line found with three of a kind. Boards
/// that could never arise in play are not rejected.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn detect_winner(board: &Board) -> Option<Symbol> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let symbol = board.get(a).symbol()?;
        (board.get(b).is(symbol) && board.get(c).is(symbol)).then_some(symbol)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(detect_winner(&board("XXX OO. ...")), Some(Symbol::X));
    }

    #[test]
    fn test_winner_every_line() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Square::Occupied(Symbol::O));
            }
            assert_eq!(detect_winner(&b), Some(Symbol::O), "line {line:?}");
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(detect_winner(&board("X.O XO. O.X")), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(detect_winner(&board("XX. O.. ...")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(detect_winner(&board("XOX OXO OXO")), None);
    }

    #[test]
    fn test_first_line_wins_on_impossible_board() {
        // Both X and O complete a row; rows are scanned top to bottom.
        assert_eq!(detect_winner(&board("OOO XXX ...")), Some(Symbol::O));
    }
}
