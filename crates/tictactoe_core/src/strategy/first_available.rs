//! Opponent that picks the first available square.

use super::Strategy;
use crate::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Takes the lowest-indexed empty square, ignoring threats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl Strategy for FirstAvailable {
    fn name(&self) -> &str {
        "first-available"
    }

    #[instrument(skip(self, board))]
    fn select_move(&self, board: &Board, _computer: Symbol, _human: Symbol) -> Option<Position> {
        let pos = Position::valid_moves(board).into_iter().next();
        debug!(position = ?pos, "Picked first free square");
        pos
    }
}
