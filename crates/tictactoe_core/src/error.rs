//! Error types for board parsing and move validation.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move or symbol choice was refused.
///
/// The game state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's the computer's turn.
    #[display("It's not the player's turn")]
    NotYourTurn,

    /// No symbol has been chosen yet.
    #[display("Choose a symbol first")]
    SymbolNotChosen,

    /// The symbol for this game was already chosen.
    #[display("Symbol already chosen for this game")]
    SymbolAlreadyChosen,
}

impl std::error::Error for MoveError {}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
