//! Greedy rule-based opponent.
//!
//! Rules are tried in order and the first that applies wins:
//!
//! 1. complete a line of our own
//! 2. block a line the human is about to complete
//! 3. take the center
//! 4. take a corner (top-left, top-right, bottom-left, bottom-right)
//! 5. take the lowest empty square
//!
//! This is not minimax; a human who sets up two threats at once can beat it.

use super::Strategy;
use crate::rules::WINNING_LINES;
use crate::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// The default computer opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Strategy for Heuristic {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn select_move(&self, board: &Board, computer: Symbol, human: Symbol) -> Option<Position> {
        select_move(board, computer, human)
    }
}

/// Picks the computer's next square with the greedy rule set.
///
/// Returns `None` when the board is full.
#[instrument(skip(board), fields(cells = %board.to_compact()))]
pub fn select_move(board: &Board, computer: Symbol, human: Symbol) -> Option<Position> {
    if let Some(pos) = completing_square(board, computer) {
        debug!(position = %pos, "Completing own line");
        return Some(pos);
    }

    if let Some(pos) = completing_square(board, human) {
        debug!(position = %pos, "Blocking opponent line");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    if let Some(pos) = Position::CORNERS.into_iter().find(|&pos| board.is_empty(pos)) {
        debug!(position = %pos, "Taking corner");
        return Some(pos);
    }

    let pos = Position::ALL.into_iter().find(|&pos| board.is_empty(pos));
    debug!(position = ?pos, "Taking first free square");
    pos
}

/// Finds the empty square that would give `symbol` three in a row.
///
/// Lines are scanned in declaration order. Within a line the gap is looked
/// for at the end, then the middle, then the start.
fn completing_square(board: &Board, symbol: Symbol) -> Option<Position> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let (sa, sb, sc) = (board.get(a), board.get(b), board.get(c));
        if sa.is(symbol) && sb.is(symbol) && board.is_empty(c) {
            Some(c)
        } else if sa.is(symbol) && board.is_empty(b) && sc.is(symbol) {
            Some(b)
        } else if board.is_empty(a) && sb.is(symbol) && sc.is(symbol) {
            Some(a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(cells: &str, computer: Symbol) -> Option<Position> {
        let board: Board = cells.parse().unwrap();
        select_move(&board, computer, computer.opponent())
    }

    #[test]
    fn win_outranks_block() {
        assert_eq!(pick("XX. OO. ...", Symbol::X), Some(Position::TopRight));
    }

    #[test]
    fn blocks_human_line() {
        assert_eq!(pick("XX. .O. ...", Symbol::O), Some(Position::TopRight));
    }

    #[test]
    fn fills_middle_gap() {
        assert_eq!(pick("X.X .O. ...", Symbol::O), Some(Position::TopCenter));
    }

    #[test]
    fn fills_leading_gap() {
        assert_eq!(pick(".XX .O. ...", Symbol::O), Some(Position::TopLeft));
    }

    #[test]
    fn takes_center_on_empty_board() {
        assert_eq!(pick(".........", Symbol::X), Some(Position::Center));
    }

    #[test]
    fn takes_first_free_corner() {
        assert_eq!(pick(".O. OXX ...", Symbol::X), Some(Position::TopLeft));
    }

    #[test]
    fn corner_order_skips_taken_corners() {
        // X holds the center; O took top-left. No line is two-deep yet.
        assert_eq!(pick("O.. .X. ...", Symbol::X), Some(Position::TopRight));
    }

    #[test]
    fn falls_back_to_lowest_square() {
        // Corners and center gone, no line can be completed or must be blocked.
        assert_eq!(pick("XOX OX. OXO", Symbol::X), Some(Position::MiddleRight));
        assert_eq!(pick("XOX OX. OXO", Symbol::O), Some(Position::MiddleRight));
    }

    #[test]
    fn full_board_has_no_move() {
        assert_eq!(pick("XOX OXX OXO", Symbol::X), None);
    }

    #[test]
    fn first_line_in_scan_order_is_completed() {
        // X can finish the top row or the left column; the row comes first.
        assert_eq!(pick("XX. X.. .OO", Symbol::X), Some(Position::TopRight));
    }
}
